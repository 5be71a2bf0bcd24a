//! CLI module for Snapzone.
//!
//! The CLI inspects the layout engine offline: which layouts a viewport
//! offers, where a zone lands, and what the configuration resolves to.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::SnapzoneError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), SnapzoneError> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);
    cli.execute()
}
