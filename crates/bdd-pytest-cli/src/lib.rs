//! Command line front end for `bdd-pytest`.
//!
//! The binary converts Gherkin `.feature` files (or JSON specification
//! trees) into pytest skeletons, one generated module per input.
//!
//! # Configuration
//!
//! - `BDD_PYTEST_LOG_LEVEL`: log verbosity (trace, debug, info, warn, error)
//! - `BDD_PYTEST_OUTPUT_DIR`: directory receiving generated files
//!
//! Command line flags take precedence over the environment.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
