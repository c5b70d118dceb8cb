//! `courtdays` command-line tool.

use std::process::ExitCode;

use clap::Parser;
use courtdays::cli::{self, Invocation};
use courtdays::core::Settings;
use courtdays::logging;
use tracing::error;

fn main() -> ExitCode {
    let invocation = Invocation::parse();

    let settings = match Settings::load(invocation.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("courtdays: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&settings.logging.level);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli::run(&invocation, &settings, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("courtdays: {e}");
            ExitCode::FAILURE
        }
    }
}
