//! Identifier sanitisation for generated filenames, classes, and functions.

use std::sync::LazyLock;

use regex::Regex;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and is covered by unit tests"
)]
static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]+").expect("valid non-word regex"));

/// Name used for a background fixture whose title is empty.
const DEFAULT_FIXTURE_NAME: &str = "Background";

fn words(name: &str) -> Vec<String> {
    NON_WORD_RE
        .replace_all(name, " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Convert free text into a lowercase, underscore-joined identifier.
///
/// Every run of characters other than letters, digits, and underscores
/// becomes a word break. Empty or punctuation-only input yields an empty
/// string.
///
/// # Examples
///
/// ```
/// use bdd_pytest::naming::snake_case;
///
/// assert_eq!(snake_case("Hello, World!"), "hello_world");
/// assert_eq!(snake_case("  "), "");
/// ```
#[must_use]
pub fn snake_case(name: &str) -> String {
    words(name).join("_").to_lowercase()
}

/// Build the test class name for a feature title.
///
/// The title is split on whitespace only. Each word has its first character
/// upper-cased with the remainder left untouched, and the words are appended
/// to `Test`. Punctuation inside a word is kept.
///
/// ```
/// use bdd_pytest::naming::class_name;
///
/// assert_eq!(class_name("user login"), "TestUserLogin");
/// assert_eq!(class_name("OAuth sign-in flow"), "TestOAuthSign-inFlow");
/// ```
#[must_use]
pub fn class_name(title: &str) -> String {
    let mut name = String::from("Test");
    for word in title.split_whitespace() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

/// Name of the auto-applied fixture generated for a background.
///
/// ```
/// use bdd_pytest::naming::fixture_name;
///
/// assert_eq!(fixture_name(""), "background");
/// assert_eq!(fixture_name("Setup DB"), "setup_db");
/// ```
#[must_use]
pub fn fixture_name(title: &str) -> String {
    if title.is_empty() {
        snake_case(DEFAULT_FIXTURE_NAME)
    } else {
        snake_case(title)
    }
}
