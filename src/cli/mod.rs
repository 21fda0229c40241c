// CLI module
// Command-line interface, argument parsing and subcommands

mod args;
pub mod commands;

pub use args::{CliArgs, Command};
pub use commands::run;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints a message and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
