//! Escaping of free text embedded in generated string literals.
//!
//! Every title, step, and table cell interpolated into a quoted annotation
//! goes through [`escape_literal`]; feature descriptions go through
//! [`escape_docstring`]. The rules live in tables; adding a row there extends
//! escaping everywhere at once.

use std::borrow::Cow;

/// Characters that cannot appear verbatim inside a single-quoted Python
/// string literal, paired with their escaped spelling.
const LITERAL_ESCAPES: &[(char, &str)] = &[
    ('\\', r"\\"),
    ('\'', r"\'"),
    ('\n', r"\n"),
    ('\r', r"\r"),
];

/// Characters escaped wherever they appear inside a triple-double-quoted
/// docstring. Newlines stay literal.
const DOCSTRING_ESCAPES: &[(char, &str)] = &[('\\', r"\\")];

/// Escaped spelling of a double quote inside a docstring.
const ESCAPED_DOUBLE_QUOTE: &str = r#"\""#;

fn lookup(table: &[(char, &'static str)], c: char) -> Option<&'static str> {
    table
        .iter()
        .find_map(|&(from, to)| (from == c).then_some(to))
}

/// A double quote is escaped when it could join a closing `"""`: when it is
/// followed by another quote or ends the text.
fn docstring_rule(c: char, next: Option<char>) -> Option<&'static str> {
    if c == '"' && next.is_none_or(|n| n == '"') {
        return Some(ESCAPED_DOUBLE_QUOTE);
    }
    lookup(DOCSTRING_ESCAPES, c)
}

/// Apply `rule` to every character, given the character that follows it.
fn escape_with<F>(text: &str, rule: F) -> Cow<'_, str>
where
    F: Fn(char, Option<char>) -> Option<&'static str>,
{
    let mut escaped = String::new();
    let mut copied = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((at, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        let Some(spelling) = rule(c, next) else {
            continue;
        };
        escaped.push_str(text.get(copied..at).unwrap_or_default());
        escaped.push_str(spelling);
        copied = at + c.len_utf8();
    }
    if copied == 0 {
        return Cow::Borrowed(text);
    }
    escaped.push_str(text.get(copied..).unwrap_or_default());
    Cow::Owned(escaped)
}

/// Escape `text` for use inside a single-quoted string literal.
///
/// The input is borrowed unchanged when it contains nothing to escape.
///
/// # Examples
///
/// ```
/// use bdd_pytest::escape::escape_literal;
///
/// assert_eq!(escape_literal("it's valid"), r"it\'s valid");
/// assert_eq!(escape_literal("plain"), "plain");
/// ```
#[must_use]
pub fn escape_literal(text: &str) -> Cow<'_, str> {
    escape_with(text, |c, _| lookup(LITERAL_ESCAPES, c))
}

/// Render `text` as a complete single-quoted literal.
///
/// ```
/// use bdd_pytest::escape::quote_literal;
///
/// assert_eq!(quote_literal("bob"), "'bob'");
/// ```
#[must_use]
pub fn quote_literal(text: &str) -> String {
    format!("'{}'", escape_literal(text))
}

/// Escape `text` for use inside a `"""` docstring.
///
/// Line breaks and lone quotes are kept; backslashes are doubled and any
/// quote that could close the docstring early is escaped.
///
/// ```
/// use bdd_pytest::escape::escape_docstring;
///
/// assert_eq!(escape_docstring(r#"say "hi""#), r#"say "hi\""#);
/// assert_eq!(escape_docstring("two\nlines"), "two\nlines");
/// ```
#[must_use]
pub fn escape_docstring(text: &str) -> Cow<'_, str> {
    escape_with(text, docstring_rule)
}
