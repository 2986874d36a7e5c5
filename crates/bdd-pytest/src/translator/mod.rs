//! Rendering of a specification tree into a pytest module.
//!
//! Rendering runs five passes in a fixed order over one in-memory buffer:
//! the import header, the class declaration, the class docstring, one stub
//! per scenario, and the background fixture. The buffer is handed from pass
//! to pass explicitly and written out once, so rendering the same tree twice
//! yields identical text.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::TranslateError;
use crate::model::Specification;
use crate::naming::snake_case;
use crate::output::persist;
use crate::template::Template;

mod passes;

/// Growing text buffer shared by the rendering passes.
pub(crate) struct Output<'t> {
    template: &'t Template,
    text: String,
}

impl<'t> Output<'t> {
    fn new(template: &'t Template) -> Self {
        Self {
            template,
            text: String::new(),
        }
    }

    pub(crate) fn template(&self) -> &'t Template {
        self.template
    }

    /// Append `line` at the given indentation depth.
    pub(crate) fn line(&mut self, depth: usize, line: &str) {
        self.text.push_str(&self.template.indentation(depth));
        self.text.push_str(line);
        self.text.push('\n');
    }

    /// Append text exactly as given.
    pub(crate) fn raw(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn blank(&mut self) {
        self.text.push('\n');
    }

    fn into_text(self) -> String {
        self.text
    }
}

/// Translates one specification into a pytest module.
///
/// Construction validates the title and derives the output filename; nothing
/// is rendered or written until [`Translator::render`] or
/// [`Translator::translate`] is called.
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    spec: &'a Specification,
    title: &'a str,
    filename: String,
    template: Template,
}

impl<'a> Translator<'a> {
    /// Prepare a translator for `spec` using the default template.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::MissingTitle`] when the specification has
    /// no title, or one that yields no identifier characters.
    pub fn new(spec: &'a Specification) -> Result<Self, TranslateError> {
        let missing = || TranslateError::MissingTitle {
            origin: spec.origin_label(),
        };
        let title = spec
            .title
            .as_ref()
            .map(|title| title.content.as_str())
            .filter(|title| !title.is_empty())
            .ok_or_else(missing)?;
        let stem = snake_case(title);
        if stem.is_empty() {
            return Err(missing());
        }
        Ok(Self {
            spec,
            title,
            filename: format!("test_{stem}.py"),
            template: Template::default(),
        })
    }

    /// Replace the framework template.
    #[must_use]
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    /// Name of the generated file, `test_<snake_case(title)>.py`.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Render the complete module text.
    ///
    /// Rendering is pure: identical input gives byte-identical output on
    /// every call.
    #[must_use]
    pub fn render(&self) -> String {
        debug!(
            filename = %self.filename,
            scenarios = self.spec.scenarios.len(),
            "rendering specification"
        );
        let mut out = Output::new(&self.template);
        passes::header(&mut out);
        passes::container(&mut out, self.spec, self.title);
        passes::description(&mut out, self.spec);
        passes::scenarios(&mut out, self.spec);
        passes::background(&mut out, self.spec);
        out.into_text()
    }

    /// Render the module and write it to `destination/<filename>`.
    ///
    /// The file is written atomically: either the complete text replaces
    /// the destination or the destination is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Write`] when the file cannot be persisted.
    pub fn translate(&self, destination: &Path) -> Result<PathBuf, TranslateError> {
        let text = self.render();
        persist(destination, &self.filename, &text)
    }
}

#[cfg(test)]
mod tests;
