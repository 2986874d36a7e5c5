//! Literal spellings of the generated pytest syntax.
//!
//! The translator decides *what* is emitted and in which order; the template
//! decides how each annotation and block is spelt. Defaults target pytest
//! with allure reporting. Overrides can be loaded from JSON, where any
//! omitted field keeps its default.

use serde::{Deserialize, Serialize};

use crate::escape::{escape_docstring, quote_literal};

const DEFAULT_HEADER: &str = "import allure\n\
                              import pytest\n\
                              from allure_commons._allure import step\n\n\n";

/// Framework template used by the translator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Template {
    /// Import block written verbatim at the top of every file.
    pub header: String,
    /// One level of indentation.
    pub indent: String,
    /// Prefix turning a tag name into a mark annotation.
    pub tag_mark: String,
    /// Annotation carrying the feature title on the class.
    pub feature_annotation: String,
    /// Annotation carrying a scenario title on its test.
    pub title_annotation: String,
    /// Annotation declaring a parametrised test.
    pub parametrize_annotation: String,
    /// Annotation marking the background fixture as auto-applied.
    pub fixture_annotation: String,
    /// Callable opening a scoped block for one step.
    pub step_block: String,
    /// No-op statement used for empty bodies.
    pub placeholder: String,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            indent: "    ".to_string(),
            tag_mark: "@pytest.mark.".to_string(),
            feature_annotation: "@allure.feature".to_string(),
            title_annotation: "@allure.title".to_string(),
            parametrize_annotation: "@pytest.mark.parametrize".to_string(),
            fixture_annotation: "@pytest.fixture(autouse=True)".to_string(),
            step_block: "with step".to_string(),
            placeholder: "pass".to_string(),
        }
    }
}

impl Template {
    /// Parse template overrides from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not a JSON object of known
    /// template fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub(crate) fn indentation(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }

    pub(crate) fn tag(&self, tag: &str) -> String {
        format!("{}{tag}", self.tag_mark)
    }

    pub(crate) fn feature(&self, title: &str) -> String {
        format!("{}({})", self.feature_annotation, quote_literal(title))
    }

    pub(crate) fn class(name: &str) -> String {
        format!("class {name}:")
    }

    pub(crate) fn docstring(description: &str) -> String {
        format!("\"\"\"{}\"\"\"", escape_docstring(description))
    }

    pub(crate) fn title(&self, title: &str) -> String {
        format!("{}({})", self.title_annotation, quote_literal(title))
    }

    pub(crate) fn parametrize(&self, names: &[String], rows: &[Vec<&str>]) -> String {
        let data = rows
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|cell| quote_literal(cell)).collect();
                format!("[{}]", cells.join(", "))
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{}({}, [{data}])",
            self.parametrize_annotation,
            quote_literal(&names.join(", "))
        )
    }

    pub(crate) fn function(name: &str, params: &[String]) -> String {
        let mut all = vec!["self"];
        all.extend(params.iter().map(String::as_str));
        format!("def {name}({}):", all.join(", "))
    }

    pub(crate) fn step(&self, clause: &str, content: &str) -> String {
        let label = format!("{} {content}", clause.to_uppercase());
        format!("{}({}):", self.step_block, quote_literal(&label))
    }
}
