use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use tally::cli::{self, Cli};

/// Exit code for usage errors and help requests
const USAGE_EXIT: u8 = 2;

fn main() -> ExitCode {
    // Help and usage errors both print usage and exit non-zero; a report is
    // only ever produced from a well-formed invocation.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(USAGE_EXIT);
        }
    };

    match cli::run(cli.command).context("tally failed") {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
