//! inctrack CLI — transitive header fan-out without a compiler.
//!
//! Resolves every quoted `#include "..."` reachable from one header against
//! the headers found in a directory tree, breadth-first and depth-bounded,
//! then prints a count, the sorted list, or a JSON report.
//!
//! Exit codes: 0 on success (and for `--help`/`--version`), 1 for any usage
//! or input error.

use std::io::Write;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use inctrack_core::tracing::init_tracing;
use inctrack_core::InctrackErrorCode;

mod args;
mod run;
mod validate;

use args::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if let Err(e) = err.print() {
                tracing::debug!(error = %e, "failed to print usage message");
            }
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_tracing(cli.verbose);

    match run::run(&cli) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
                tracing::debug!(error = %e, "stdout closed early");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(code = e.error_code(), "run failed");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
