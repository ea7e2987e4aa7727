//! CLI argument definitions using clap
//!
//! Commands:
//! - companydb init --config <path>
//! - companydb serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// companydb - HTTP/JSON data-access service over the COMPANY schema
#[derive(Parser, Debug)]
#[command(name = "companydb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config file and create the database
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./companydb.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./companydb.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
