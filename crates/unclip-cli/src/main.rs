//! Unclip CLI - extracts txtar-formatted clipboard contents to disk.

mod cli;
mod logging;

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;
use tracing::error;

fn main() -> ExitCode {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = logging::init(cli.log_format, cli.verbose) {
        eprintln!("ERROR: {err:#}");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("run failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// One extraction pass against the current working directory.
///
/// Per-entry extraction failures are reported through logs and the preserved
/// staging file, not through the exit code; only clipboard, staging, and
/// parse errors fail the run.
fn run() -> Result<()> {
    let dest = env::current_dir().context("failed to get current directory")?;
    let report = unclip_core::extract_clipboard(&dest)?;
    debug!(
        extracted = report.files_extracted(),
        total = report.len(),
        "run complete"
    );
    Ok(())
}
