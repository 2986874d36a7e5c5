//! Tests for converting Gherkin features into specification trees.

use super::*;
use rstest::rstest;
use tempfile::TempDir;

#[expect(
    clippy::expect_used,
    reason = "tests use explicit failures for clarity"
)]
#[test]
fn converts_feature_tags_description_background_and_steps() {
    let spec = parse_feature_text(concat!(
        "@smoke @auth\n",
        "Feature: User login\n",
        "  Users sign in with a password.\n",
        "\n",
        "  Background: Setup DB\n",
        "    Given an empty database\n",
        "\n",
        "  @fast\n",
        "  Scenario: user signs in\n",
        "    Given a registered user\n",
        "    And a valid password\n",
        "    When they sign in\n",
        "    Then they see the dashboard\n",
    ))
    .expect("parse feature");

    assert_eq!(spec.title, Some(Text::new("User login")));
    assert_eq!(spec.tag_names(), ["smoke", "auth"]);
    assert_eq!(
        spec.description.as_ref().map(|d| d.content.as_str()),
        Some("Users sign in with a password.")
    );

    let background = spec.background.as_ref().expect("background present");
    assert_eq!(background.title.content, "Setup DB");
    assert_eq!(background.steps, vec![Step::new("given", "an empty database")]);

    let scenario = spec.scenarios.first().expect("one scenario");
    assert_eq!(scenario.title.content, "user signs in");
    assert_eq!(scenario.tag_names(), ["fast"]);
    assert!(scenario.examples.is_none());
    let clauses: Vec<&str> = scenario
        .steps
        .iter()
        .map(|step| step.title.clause.as_str())
        .collect();
    assert_eq!(clauses, ["given", "and", "when", "then"]);
}

#[expect(
    clippy::expect_used,
    reason = "tests use explicit failures for clarity"
)]
#[test]
fn feature_without_optional_parts_leaves_them_absent() {
    let spec = parse_feature_text("Feature: Login").expect("parse feature");
    assert_eq!(spec.title, Some(Text::new("Login")));
    assert!(spec.tags.is_none());
    assert!(spec.description.is_none());
    assert!(spec.background.is_none());
    assert!(spec.scenarios.is_empty());
}

#[expect(
    clippy::expect_used,
    reason = "tests use explicit failures for clarity"
)]
#[test]
fn concatenates_examples_tables_under_first_header() {
    let spec = parse_feature_text(concat!(
        "Feature: Passwords\n",
        "  Scenario Outline: user enters bad password\n",
        "    Given user <user> with password <pass>\n",
        "    Examples:\n",
        "      | user | pass |\n",
        "      | bob  | x    |\n",
        "    Examples:\n",
        "      | user | pass |\n",
        "      | amy  | y    |\n",
    ))
    .expect("parse feature");

    let examples = spec
        .scenarios
        .first()
        .and_then(|s| s.examples.as_ref())
        .expect("examples present");
    assert_eq!(
        examples.table,
        vec![
            ["user", "pass"].into_iter().collect::<Row>(),
            ["bob", "x"].into_iter().collect(),
            ["amy", "y"].into_iter().collect(),
        ]
    );
}

#[test]
fn rejects_examples_tables_with_different_headers() {
    let result = parse_feature_text(concat!(
        "Feature: Passwords\n",
        "  Scenario Outline: mixed tables\n",
        "    Given user <user>\n",
        "    Examples:\n",
        "      | user |\n",
        "      | bob  |\n",
        "    Examples:\n",
        "      | name |\n",
        "      | amy  |\n",
    ));
    assert!(matches!(
        result,
        Err(TranslateError::ExamplesHeaderMismatch { ref scenario }) if scenario == "mixed tables"
    ));
}

#[expect(
    clippy::expect_used,
    reason = "tests use explicit failures for clarity"
)]
#[test]
fn flattens_rule_scenarios_with_merged_tags() {
    let spec = parse_feature_text(concat!(
        "Feature: Accounts\n",
        "  Scenario: top level\n",
        "    Given something\n",
        "\n",
        "  @billing\n",
        "  Rule: invoices\n",
        "    @slow @billing\n",
        "    Scenario: inside rule\n",
        "      Given an invoice\n",
    ))
    .expect("parse feature");

    let titles: Vec<&str> = spec
        .scenarios
        .iter()
        .map(|s| s.title.content.as_str())
        .collect();
    assert_eq!(titles, ["top level", "inside rule"]);
    let nested = spec.scenarios.get(1).expect("rule scenario");
    assert_eq!(nested.tag_names(), ["billing", "slow"]);
}

#[rstest]
#[case(&["@a"], &["b"], Some(vec!["a", "b"]))]
#[case(&["a"], &["@a", "c"], Some(vec!["a", "c"]))]
#[case(&[], &[], None)]
fn merges_tag_sets(
    #[case] base: &[&str],
    #[case] own: &[&str],
    #[case] expected: Option<Vec<&str>>,
) {
    let base: Vec<String> = base.iter().map(ToString::to_string).collect();
    let own: Vec<String> = own.iter().map(ToString::to_string).collect();
    let merged = convert_tags(&base, &own);
    assert_eq!(merged, expected.map(|tags| tags.into_iter().collect()));
}

#[test]
fn reports_parse_failures() {
    let result = parse_feature_text("this is not gherkin at all\n");
    assert!(matches!(result, Err(TranslateError::Feature { .. })));
}

#[expect(
    clippy::expect_used,
    reason = "tests use explicit failures for clarity"
)]
#[test]
fn load_feature_records_origin() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("login.feature");
    std::fs::write(&path, "Feature: Login\n").expect("write feature file");

    let spec = load_feature(&path).expect("load feature");
    assert_eq!(spec.origin.as_deref(), Some(path.as_path()));
}

#[expect(
    clippy::expect_used,
    reason = "tests use explicit failures for clarity"
)]
#[test]
fn load_feature_reports_missing_files() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.feature");
    let err = load_feature(&path).expect_err("missing file must fail");
    assert!(matches!(err, TranslateError::Read { path: ref p, .. } if p == &path));
}
