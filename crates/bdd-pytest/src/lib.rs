//! Translate Gherkin behaviour specifications into pytest test skeletons.
//!
//! The crate takes a parsed specification tree ([`Specification`]) and
//! renders a Python module containing one test class: stub test methods for
//! every scenario, `pytest.mark.parametrize` tables for scenario outlines, an
//! auto-applied fixture for the background, and the feature and scenario
//! tags carried over as pytest marks.
//!
//! # Overview
//!
//! - [`model`] describes the specification tree.
//! - [`feature`] and [`source`] load that tree from `.feature` or `.json`
//!   files.
//! - [`Translator`] renders the tree in five passes into an in-memory buffer
//!   and persists it atomically.
//! - [`Template`] holds the literal spellings of the generated syntax.
//!
//! # Example
//!
//! ```
//! use bdd_pytest::{Translator, feature::parse_feature_text};
//!
//! let spec = parse_feature_text(concat!(
//!     "Feature: Login\n",
//!     "  Scenario: user signs in\n",
//!     "    Given a registered user\n",
//! ))?;
//! let translator = Translator::new(&spec)?;
//! assert_eq!(translator.filename(), "test_login.py");
//! assert!(translator.render().contains("class TestLogin:"));
//! # Ok::<(), bdd_pytest::TranslateError>(())
//! ```

pub mod error;
pub mod escape;
pub mod feature;
pub mod model;
pub mod naming;
pub mod output;
pub mod source;
pub mod template;
pub mod translator;

/// Builders for specification trees used by unit and integration tests.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_support;

pub use error::TranslateError;
pub use model::{Background, Examples, Row, Scenario, Specification, Step, StepTitle, Tags, Text};
pub use naming::snake_case;
pub use template::Template;
pub use translator::Translator;
