//! `bdd-pytest` binary: generate pytest skeletons from feature files.

use std::io;

use bdd_pytest_cli::cli::{Args, RunSettings, run};
use bdd_pytest_cli::config::CliConfig;
use bdd_pytest_cli::logging::init_logging;
use clap::Parser;
use tracing::{error, info};

fn main() {
    let args = Args::parse();

    let settings = match RunSettings::resolve(&args) {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&CliConfig::default());
            error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&settings.config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        inputs = args.inputs.len(),
        "starting bdd-pytest"
    );

    let mut stdout = io::stdout().lock();
    match run(&args.inputs, &settings, &mut stdout) {
        Ok(0) => {}
        Ok(failed) => {
            error!(failed, "some inputs could not be converted");
            std::process::exit(1);
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "run aborted");
            std::process::exit(1);
        }
    }
}
