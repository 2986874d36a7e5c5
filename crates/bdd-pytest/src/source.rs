//! Loading specification trees from disk.
//!
//! `.json` files are read as a serialised [`Specification`]; every other
//! file is handed to the Gherkin parser.

use std::ffi::OsStr;
use std::path::Path;

use tracing::debug;

use crate::error::TranslateError;
use crate::feature::load_feature;
use crate::model::Specification;

/// Input formats understood by [`load_specification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Gherkin `.feature` text.
    Feature,
    /// A JSON document shaped like [`Specification`].
    Json,
}

impl SourceFormat {
    /// Pick the format for `path` from its extension.
    ///
    /// ```
    /// use std::path::Path;
    /// use bdd_pytest::source::SourceFormat;
    ///
    /// assert_eq!(SourceFormat::detect(Path::new("tree.JSON")), SourceFormat::Json);
    /// assert_eq!(SourceFormat::detect(Path::new("login.feature")), SourceFormat::Feature);
    /// ```
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Feature,
        }
    }
}

/// Load a specification from `path`, choosing the parser by extension.
///
/// The returned specification records `path` as its origin.
///
/// # Errors
///
/// Returns [`TranslateError::Read`] when the file cannot be read,
/// [`TranslateError::Json`] for a malformed JSON tree, and the errors of
/// [`crate::feature::parse_feature_text`] for Gherkin input.
pub fn load_specification(path: &Path) -> Result<Specification, TranslateError> {
    let format = SourceFormat::detect(path);
    debug!(path = %path.display(), ?format, "loading specification");
    match format {
        SourceFormat::Feature => load_feature(path),
        SourceFormat::Json => load_json(path),
    }
}

fn load_json(path: &Path) -> Result<Specification, TranslateError> {
    let text = std::fs::read_to_string(path).map_err(|source| TranslateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut spec: Specification =
        serde_json::from_str(&text).map_err(|source| TranslateError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    spec.origin = Some(path.to_path_buf());
    Ok(spec)
}
