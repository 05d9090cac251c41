//! Coven - command-line driver for the presto chango spell

use std::process::ExitCode;

use coven::cli;

fn main() -> ExitCode {
    cli::run()
}
