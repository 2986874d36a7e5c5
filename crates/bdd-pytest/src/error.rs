//! Semantic error types for loading and translating specifications.
//!
//! Translation itself has a single failure mode, a specification without a
//! usable title. The remaining variants belong to the input and output
//! boundaries: reading sources, parsing them, and persisting the result.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, translating, or persisting a specification.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The specification has no title, so no filename or class name can be
    /// derived.
    #[error("specification {origin} has no title; cannot derive an output filename")]
    MissingTitle {
        /// Label identifying the input, usually its path.
        origin: String,
    },

    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the unreadable input.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The Gherkin parser rejected the input.
    #[error("failed to parse feature file {}: {source}", path.display())]
    Feature {
        /// Path of the rejected feature file.
        path: PathBuf,
        /// Parser failure.
        #[source]
        source: gherkin::ParseError,
    },

    /// A JSON specification tree did not match the expected shape.
    #[error("invalid specification tree in {}: {source}", path.display())]
    Json {
        /// Path of the rejected JSON document.
        path: PathBuf,
        /// Deserialisation failure.
        #[source]
        source: serde_json::Error,
    },

    /// Two examples tables of the same scenario declare different columns.
    #[error("examples tables in scenario '{scenario}' declare different header rows")]
    ExamplesHeaderMismatch {
        /// Title of the offending scenario.
        scenario: String,
    },

    /// The generated file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
