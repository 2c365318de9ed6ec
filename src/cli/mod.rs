//! CLI module for relcond
//!
//! Provides command-line interface for:
//! - select: evaluate a selection request read from stdin
//! - explain: show how a selection request compiles

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    explain, explain_select, run, run_command, run_select, select, SelectRequest, TableSpec,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_request, read_request, write_error, write_response};
