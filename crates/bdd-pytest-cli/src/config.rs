//! Run configuration parsed from environment variables.
//!
//! Settings can be provided via environment variables prefixed with
//! `BDD_PYTEST_`; command line flags override them.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use bdd_pytest::Template;

use crate::error::ConfigError;

const LOG_LEVEL_VAR: &str = "BDD_PYTEST_LOG_LEVEL";
const OUTPUT_DIR_VAR: &str = "BDD_PYTEST_OUTPUT_DIR";

/// Verbosity of the diagnostics written to stderr.
///
/// Each level adds to the one below it. At the default `Info` a clean run
/// prints one line per generated file, and `Debug` adds the loaded inputs
/// and every rendering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything `Debug` shows; reserved for finer detail.
    Trace,
    /// Loaded inputs, chosen filenames, and one event per rendering pass.
    Debug,
    /// One line per written file.
    #[default]
    Info,
    /// Skipped rule backgrounds and other input the model cannot carry.
    Warn,
    /// Only inputs that failed to convert.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::Invalid(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Filter directive handed to `EnvFilter`, as accepted by
    /// `--log-level` and `BDD_PYTEST_LOG_LEVEL`.
    #[must_use]
    pub fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration for one run of the tool.
///
/// # Environment Variables
///
/// - `BDD_PYTEST_LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `BDD_PYTEST_OUTPUT_DIR`: directory receiving generated files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level.
    pub log_level: LogLevel,
    /// Directory receiving generated files.
    pub output_dir: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration using `lookup` to resolve variables.
    ///
    /// Missing or empty variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |name: &str| lookup(name).filter(|v: &String| !v.trim().is_empty());

        let log_level = match value(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => defaults.log_level,
        };
        let output_dir = value(OUTPUT_DIR_VAR).map_or(defaults.output_dir, PathBuf::from);

        Ok(Self {
            log_level,
            output_dir,
        })
    }

    /// Apply command line overrides, which take precedence over the
    /// environment.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        output_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

/// Load the framework template, applying overrides from `path` if given.
///
/// # Errors
///
/// Returns `ConfigError::TemplateRead` or `ConfigError::TemplateParse` when
/// the override file cannot be used.
pub fn load_template(path: Option<&Path>) -> Result<Template, ConfigError> {
    let Some(path) = path else {
        return Ok(Template::default());
    };
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })?;
    Template::from_json(&json).map_err(|source| ConfigError::TemplateParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn log_level_parses_valid_values() {
        assert_eq!("trace".parse::<LogLevel>().ok(), Some(LogLevel::Trace));
        assert_eq!("debug".parse::<LogLevel>().ok(), Some(LogLevel::Debug));
        assert_eq!("info".parse::<LogLevel>().ok(), Some(LogLevel::Info));
        assert_eq!("warn".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert_eq!("warning".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert_eq!("error".parse::<LogLevel>().ok(), Some(LogLevel::Error));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        assert_eq!("TRACE".parse::<LogLevel>().ok(), Some(LogLevel::Trace));
        assert_eq!("Debug".parse::<LogLevel>().ok(), Some(LogLevel::Debug));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown log level"));
    }

    #[test]
    fn config_defaults_when_environment_is_empty() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn config_reads_environment_values() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (LOG_LEVEL_VAR, "debug"),
            (OUTPUT_DIR_VAR, "generated"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output_dir, PathBuf::from("generated"));
    }

    #[test]
    fn blank_environment_values_fall_back_to_defaults() {
        let config =
            CliConfig::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "  "), (OUTPUT_DIR_VAR, "")]))
                .unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn invalid_environment_log_level_is_rejected() {
        let result = CliConfig::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "chatty")]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let config = CliConfig::default()
            .apply_overrides(Some(LogLevel::Error), Some(PathBuf::from("out")));
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.output_dir, PathBuf::from("out"));

        let config = CliConfig::default().apply_overrides(None, None);
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn missing_template_path_uses_defaults() {
        assert_eq!(load_template(None).unwrap(), Template::default());
    }

    #[test]
    fn template_overrides_are_loaded_from_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("template.json");
        std::fs::write(&path, r#"{"indent": "\t"}"#).unwrap();
        let template = load_template(Some(&path)).unwrap();
        assert_eq!(template.indent, "\t");
    }

    #[test]
    fn malformed_template_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("template.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            load_template(Some(&path)),
            Err(ConfigError::TemplateParse { .. })
        ));
    }
}
