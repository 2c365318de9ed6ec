//! CLI argument definitions using clap
//!
//! Commands:
//! - relcond select [--config <path>]
//! - relcond explain [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// relcond - evaluate `select ... where ...` over JSON tables
#[derive(Parser, Debug)]
#[command(name = "relcond")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read a selection request from stdin and print the matching rows
    Select {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Read a selection request from stdin and print how it compiles
    Explain {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
