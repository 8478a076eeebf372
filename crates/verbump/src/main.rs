//! verbump CLI
//!
//! Bumps one component of a version and prints the result.
//!
//! Usage:
//!   verbump patch            # 1.2.3 in ./VERSION -> 1.2.4
//!   verbump minor 1.2.3      # -> 1.3.0
//!   verbump major --write    # bump ./VERSION and save it

use std::process::ExitCode;

use crate::cli::Cli;
use crate::command::handle_command;
use crate::utils::init_logging;

mod cli;
mod command;
mod utils;

fn main() -> ExitCode {
    use clap::Parser;
    let cli = Cli::parse();

    init_logging();
    handle_command(cli)
}
