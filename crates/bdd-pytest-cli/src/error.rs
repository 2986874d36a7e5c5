//! Configuration errors for the command line front end.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling the run configuration.
///
/// These are reported before any input is touched and end the process with
/// exit status 2.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable or flag held an unusable value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// The template override file could not be read.
    #[error("failed to read template {}: {source}", path.display())]
    TemplateRead {
        /// Path of the template file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The template override file is not a valid template document.
    #[error("invalid template {}: {source}", path.display())]
    TemplateParse {
        /// Path of the template file.
        path: PathBuf,
        /// Deserialisation failure.
        #[source]
        source: serde_json::Error,
    },
}
