//! Argument parsing and input orchestration for the `bdd-pytest` binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use bdd_pytest::source::load_specification;
use bdd_pytest::{Template, Translator};
use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, error};

use crate::config::{CliConfig, LogLevel, load_template};
use crate::error::ConfigError;

/// Generate pytest skeletons from Gherkin feature files.
#[derive(Parser, Debug)]
#[command(name = "bdd-pytest", version, about)]
pub struct Args {
    /// Feature (`.feature`) or specification tree (`.json`) files to convert.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
    /// Directory receiving the generated files.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Print generated modules to stdout instead of writing files.
    #[arg(long)]
    pub stdout: bool,
    /// JSON file overriding parts of the framework template.
    #[arg(long)]
    pub template: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

/// Everything a run needs besides the inputs themselves.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Environment configuration with CLI overrides applied.
    pub config: CliConfig,
    /// Framework template.
    pub template: Template,
    /// Print modules instead of writing files.
    pub to_stdout: bool,
}

impl RunSettings {
    /// Resolve settings from the environment and the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the environment or template file holds
    /// an invalid value.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let config =
            CliConfig::from_env()?.apply_overrides(args.log_level, args.output_dir.clone());
        let template = load_template(args.template.as_deref())?;
        Ok(Self {
            config,
            template,
            to_stdout: args.stdout,
        })
    }
}

/// Convert every input, continuing past failures.
///
/// Written paths (or generated text with `--stdout`) go to `out`. Returns
/// the number of inputs that could not be converted.
///
/// # Errors
///
/// Returns an error only when `out` itself cannot be written.
pub fn run(inputs: &[PathBuf], settings: &RunSettings, out: &mut dyn Write) -> Result<usize> {
    let mut failed = 0;
    for input in inputs {
        match convert(input, settings) {
            Ok(Converted::Written(path)) => writeln!(out, "{}", path.display())
                .wrap_err_with(|| format!("failed to report {}", path.display()))?,
            Ok(Converted::Rendered(text)) => out
                .write_all(text.as_bytes())
                .wrap_err_with(|| format!("failed to print module for {}", input.display()))?,
            Err(err) => {
                error!(input = %input.display(), error = %format!("{err:#}"), "conversion failed");
                failed += 1;
            }
        }
    }
    out.flush().wrap_err("failed to flush output")?;
    Ok(failed)
}

enum Converted {
    Written(PathBuf),
    Rendered(String),
}

fn convert(input: &Path, settings: &RunSettings) -> Result<Converted> {
    let spec = load_specification(input)?;
    let translator = Translator::new(&spec)?.with_template(settings.template.clone());
    debug!(input = %input.display(), filename = translator.filename(), "translating");
    if settings.to_stdout {
        return Ok(Converted::Rendered(translator.render()));
    }
    let dir = &settings.config.output_dir;
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create output directory {}", dir.display()))?;
    Ok(Converted::Written(translator.translate(dir)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn settings(output_dir: &Path, to_stdout: bool) -> RunSettings {
        RunSettings {
            config: CliConfig::default().apply_overrides(None, Some(output_dir.to_path_buf())),
            template: Template::default(),
            to_stdout,
        }
    }

    #[test]
    fn writes_modules_and_reports_paths() -> Result<()> {
        let dir = TempDir::new()?;
        let input = dir.path().join("login.feature");
        std::fs::write(&input, "Feature: Login\n  Scenario: ok\n    Given a user\n")?;
        let out_dir = dir.path().join("generated");

        let mut out = Vec::new();
        let failed = run(&[input], &settings(&out_dir, false), &mut out)?;

        assert_eq!(failed, 0);
        let expected = out_dir.join("test_login.py");
        assert_eq!(String::from_utf8(out)?, format!("{}\n", expected.display()));
        assert!(std::fs::read_to_string(expected)?.contains("def test_ok(self):"));
        Ok(())
    }

    #[test]
    fn stdout_mode_prints_without_writing() -> Result<()> {
        let dir = TempDir::new()?;
        let input = dir.path().join("login.feature");
        std::fs::write(&input, "Feature: Login\n")?;
        let out_dir = dir.path().join("generated");

        let mut out = Vec::new();
        let failed = run(&[input], &settings(&out_dir, true), &mut out)?;

        assert_eq!(failed, 0);
        assert!(String::from_utf8(out)?.ends_with("class TestLogin:\n"));
        assert!(!out_dir.exists());
        Ok(())
    }

    #[test]
    fn failures_are_counted_and_other_inputs_continue() -> Result<()> {
        let dir = TempDir::new()?;
        let untitled = dir.path().join("untitled.json");
        std::fs::write(&untitled, r#"{"scenarios": []}"#)?;
        let missing = dir.path().join("missing.feature");
        let good = dir.path().join("good.feature");
        std::fs::write(&good, "Feature: Good\n")?;

        let mut out = Vec::new();
        let failed = run(
            &[untitled, missing, good],
            &settings(dir.path(), false),
            &mut out,
        )?;

        assert_eq!(failed, 2);
        assert!(dir.path().join("test_good.py").exists());
        assert!(!dir.path().join("test_.py").exists());
        Ok(())
    }
}
