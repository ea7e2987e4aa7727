//! CLI module for companydb
//!
//! Provides command-line interface for:
//! - init: Write a default config file and create the database
//! - serve: Boot the HTTP server and serve until shutdown

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, serve};
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    match Cli::parse_args().command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
    }
}
