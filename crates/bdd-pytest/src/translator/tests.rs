//! Tests for specification rendering.

use super::*;
use crate::test_support::{ScenarioBuilder, SpecBuilder, step};
use rstest::{fixture, rstest};

const HEADER: &str = "import allure\nimport pytest\nfrom allure_commons._allure import step\n\n\n";

#[fixture]
fn login_spec() -> Specification {
    SpecBuilder::new("User login")
        .with_tags(&["smoke"])
        .with_description("Users sign in.")
        .with_scenario(
            ScenarioBuilder::new("it's valid")
                .with_tags(&["fast"])
                .with_step("given", "a user's account")
                .with_step("then", "ok"),
        )
        .with_scenario(
            ScenarioBuilder::new("user enters bad password")
                .with_examples(&[&["user", "pass"], &["bob", "x"], &["amy", "y"]]),
        )
        .with_background("Setup DB", vec![step("given", "a db")])
        .build()
}

fn render(spec: &Specification) -> String {
    match Translator::new(spec) {
        Ok(translator) => translator.render(),
        Err(err) => panic!("translator construction failed: {err}"),
    }
}

#[rstest]
fn renders_every_pass_in_order(login_spec: Specification) {
    let expected = [
        HEADER,
        "@pytest.mark.smoke\n",
        "@allure.feature('User login')\n",
        "class TestUserLogin:\n",
        "    \"\"\"Users sign in.\"\"\"\n",
        "\n",
        "    @pytest.mark.fast\n",
        "    @allure.title('it\\'s valid')\n",
        "    def test_it_s_valid(self):\n",
        "        with step('GIVEN a user\\'s account'):\n",
        "            pass\n",
        "        with step('THEN ok'):\n",
        "            pass\n",
        "\n",
        "    @allure.title('user enters bad password')\n",
        "    @pytest.mark.parametrize('user, pass', [['bob', 'x'], ['amy', 'y']])\n",
        "    def test_user_enters_bad_password(self, user, pass):\n",
        "        pass\n",
        "\n",
        "    @pytest.fixture(autouse=True)\n",
        "    def setup_db(self):\n",
        "        with step('GIVEN a db'):\n",
        "            pass\n",
    ]
    .concat();
    assert_eq!(render(&login_spec), expected);
}

#[test]
fn title_only_renders_header_annotation_and_class() {
    let spec = SpecBuilder::new("Login").build();
    assert_eq!(
        render(&spec),
        format!("{HEADER}@allure.feature('Login')\nclass TestLogin:\n")
    );
}

#[test]
fn derives_filename_from_title() -> Result<(), TranslateError> {
    let spec = SpecBuilder::new("Hello, World!").build();
    assert_eq!(Translator::new(&spec)?.filename(), "test_hello_world.py");
    Ok(())
}

#[rstest]
#[case::absent(SpecBuilder::untitled().build())]
#[case::empty(SpecBuilder::new("").build())]
#[case::punctuation_only(SpecBuilder::new("?!").build())]
fn rejects_specifications_without_a_usable_title(#[case] spec: Specification) {
    assert!(matches!(
        Translator::new(&spec),
        Err(TranslateError::MissingTitle { .. })
    ));
}

#[test]
fn missing_title_error_names_the_origin() {
    let mut spec = SpecBuilder::untitled().build();
    spec.origin = Some(PathBuf::from("features/untitled.json"));
    match Translator::new(&spec) {
        Err(err) => assert!(err.to_string().contains("features/untitled.json")),
        Ok(_) => panic!("untitled specification must be rejected"),
    }
}

#[test]
fn scenario_without_steps_has_single_placeholder_body() {
    let spec = SpecBuilder::new("Login")
        .with_scenario(ScenarioBuilder::new("nothing happens"))
        .build();
    let text = render(&spec);
    let body = text
        .split_once("    def test_nothing_happens(self):\n")
        .map(|(_, body)| body);
    assert_eq!(body, Some("        pass\n"));
}

#[test]
fn header_only_examples_render_empty_data_list() {
    let spec = SpecBuilder::new("Login")
        .with_scenario(ScenarioBuilder::new("outline").with_examples(&[&["user"]]))
        .build();
    let text = render(&spec);
    assert!(text.contains("    @pytest.mark.parametrize('user', [])\n"));
    assert!(text.contains("    def test_outline(self, user):\n"));
}

#[test]
fn empty_examples_table_is_treated_as_absent() {
    let spec = SpecBuilder::new("Login")
        .with_scenario(ScenarioBuilder::new("plain").with_examples(&[]))
        .build();
    let text = render(&spec);
    assert!(!text.contains("parametrize"));
    assert!(text.contains("    def test_plain(self):\n"));
}

#[test]
fn escapes_quotes_in_table_cells_and_feature_title() {
    let spec = SpecBuilder::new("Bob's shop")
        .with_scenario(
            ScenarioBuilder::new("names").with_examples(&[&["name"], &["O'Brien"]]),
        )
        .build();
    let text = render(&spec);
    assert!(text.contains("@allure.feature('Bob\\'s shop')\n"));
    assert!(text.contains("[['O\\'Brien']]"));
    assert!(text.contains("class TestBob'sShop:\n"));
}

#[test]
fn apostrophes_are_escaped_exactly_once() {
    let spec = SpecBuilder::new("Login")
        .with_scenario(ScenarioBuilder::new("it's valid").with_step("given", "it's set"))
        .build();
    let text = render(&spec);
    assert!(text.contains("@allure.title('it\\'s valid')"));
    assert!(text.contains("with step('GIVEN it\\'s set'):"));
    assert!(!text.contains("\\\\'"));
}

#[rstest]
#[case("", "    def background(self):\n")]
#[case("Setup DB", "    def setup_db(self):\n")]
fn names_background_fixture(#[case] title: &str, #[case] signature: &str) {
    let spec = SpecBuilder::new("Login").with_background(title, Vec::new()).build();
    let text = render(&spec);
    let expected = format!("\n    @pytest.fixture(autouse=True)\n{signature}        pass\n");
    assert!(text.ends_with(&expected), "unexpected fixture in:\n{text}");
}

#[test]
fn empty_description_is_skipped() {
    let spec = SpecBuilder::new("Login").with_description("").build();
    assert!(!render(&spec).contains("\"\"\""));
}

#[rstest]
#[case("line one\nline \"\"\"two", "    \"\"\"line one\nline \\\"\\\"\"two\"\"\"\n")]
#[case("ends with \"quote\"", "    \"\"\"ends with \"quote\\\"\"\"\"\n")]
#[case(r"C:\temp", "    \"\"\"C:\\\\temp\"\"\"\n")]
fn description_is_escaped_for_docstring(#[case] description: &str, #[case] expected: &str) {
    let spec = SpecBuilder::new("Login").with_description(description).build();
    let text = render(&spec);
    assert!(text.ends_with(expected), "unexpected docstring in:\n{text}");
    assert_eq!(text.matches("\"\"\"").count(), 2);
}

#[test]
fn class_name_keeps_punctuation_inside_words() {
    let spec = SpecBuilder::new("OAuth sign-in flow").build();
    let text = render(&spec);
    assert!(text.contains("class TestOAuthSign-inFlow:\n"));
    assert!(text.contains("@allure.feature('OAuth sign-in flow')\n"));
}

#[test]
fn tags_keep_input_order() {
    let spec = SpecBuilder::new("Login")
        .with_tags(&["b", "a", "c"])
        .build();
    assert!(render(&spec).contains("@pytest.mark.b\n@pytest.mark.a\n@pytest.mark.c\n"));
}

#[rstest]
fn rendering_is_idempotent(login_spec: Specification) -> Result<(), TranslateError> {
    let translator = Translator::new(&login_spec)?;
    assert_eq!(translator.render(), translator.render());
    Ok(())
}

#[test]
fn custom_template_changes_spelling_only() -> Result<(), TranslateError> {
    let spec = SpecBuilder::new("Login")
        .with_scenario(ScenarioBuilder::new("empty"))
        .build();
    let template = Template {
        header: "import pytest\n\n".to_string(),
        indent: "\t".to_string(),
        ..Template::default()
    };
    let text = Translator::new(&spec)?.with_template(template).render();
    assert_eq!(
        text,
        concat!(
            "import pytest\n\n",
            "@allure.feature('Login')\n",
            "class TestLogin:\n",
            "\n",
            "\t@allure.title('empty')\n",
            "\tdef test_empty(self):\n",
            "\t\tpass\n",
        )
    );
    Ok(())
}

#[expect(
    clippy::expect_used,
    reason = "tests use explicit failures for clarity"
)]
#[rstest]
fn translate_writes_identical_file_on_every_call(login_spec: Specification) {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let translator = Translator::new(&login_spec).expect("translator");

    let first = translator.translate(dir.path()).expect("first translate");
    let first_text = std::fs::read_to_string(&first).expect("read first");
    let second = translator.translate(dir.path()).expect("second translate");
    let second_text = std::fs::read_to_string(&second).expect("read second");

    assert_eq!(first, dir.path().join("test_user_login.py"));
    assert_eq!(first, second);
    assert_eq!(first_text, second_text);
    assert_eq!(first_text, translator.render());
}
