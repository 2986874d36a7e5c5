//! Parsed specification tree consumed by the translator.
//!
//! The shapes mirror the output of a Gherkin parser: every free-text value
//! is wrapped in a `{content: ...}` record, tags and examples are optional,
//! and sequences default to empty. The types deserialise from JSON of the
//! same shape, so a tree produced by an external parser can be fed in
//! directly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single free-text value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// The text as written in the source.
    pub content: String,
}

impl Text {
    /// Wrap a string.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Ordered tag names, without the leading `@`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    /// Tag names in source order.
    #[serde(default)]
    pub content: Vec<String>,
}

impl<S: Into<String>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            content: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A single row of an examples table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Cell values in column order.
    #[serde(default)]
    pub columns: Vec<String>,
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// The examples table of a scenario outline.
///
/// The first row holds the parameter names; the remaining rows hold values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Examples {
    /// Header row followed by data rows.
    #[serde(default)]
    pub table: Vec<Row>,
}

impl Examples {
    /// Parameter names taken from the header row.
    ///
    /// Returns `None` when the table has no rows at all.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.table.first().map(|row| row.columns.as_slice())
    }

    /// Data rows following the header.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        self.table.get(1..).unwrap_or_default()
    }
}

/// Keyword and text of a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTitle {
    /// Step keyword such as `given`, `when`, `then`, `and`.
    pub clause: String,
    /// Text following the keyword.
    pub content: String,
}

/// One step of a scenario or background.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Keyword and text.
    pub title: StepTitle,
}

impl Step {
    /// Build a step from its keyword and text.
    #[must_use]
    pub fn new(clause: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: StepTitle {
                clause: clause.into(),
                content: content.into(),
            },
        }
    }
}

/// One scenario, optionally parametrised by an examples table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario title.
    pub title: Text,
    /// Tags applied to this scenario only.
    #[serde(default)]
    pub tags: Option<Tags>,
    /// Examples table for scenario outlines.
    #[serde(default)]
    pub examples: Option<Examples>,
    /// Steps in source order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Tag names, or an empty slice when the scenario carries none.
    #[must_use]
    pub fn tag_names(&self) -> &[String] {
        self.tags
            .as_ref()
            .map(|tags| tags.content.as_slice())
            .unwrap_or_default()
    }
}

/// Steps shared by every scenario of a specification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    /// Background title; often empty.
    #[serde(default)]
    pub title: Text,
    /// Steps in source order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A parsed specification document (a Gherkin feature).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    /// Feature title. Required for translation.
    #[serde(default)]
    pub title: Option<Text>,
    /// Free-form description below the title.
    #[serde(default)]
    pub description: Option<Text>,
    /// Feature-level tags.
    #[serde(default)]
    pub tags: Option<Tags>,
    /// Scenarios in source order.
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    /// Shared setup steps.
    #[serde(default)]
    pub background: Option<Background>,
    /// Where the tree was loaded from. Used in diagnostics only.
    #[serde(skip)]
    pub origin: Option<PathBuf>,
}

impl Specification {
    /// Tag names, or an empty slice when the feature carries none.
    #[must_use]
    pub fn tag_names(&self) -> &[String] {
        self.tags
            .as_ref()
            .map(|tags| tags.content.as_slice())
            .unwrap_or_default()
    }

    /// Label identifying this specification in error messages.
    #[must_use]
    pub fn origin_label(&self) -> String {
        self.origin.as_ref().map_or_else(
            || "<unnamed specification>".to_string(),
            |path| path.display().to_string(),
        )
    }
}
