//! CLI module for chatdeck.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and usage display
//! - Credential status and removal
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use chatdeck::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&args.command, &config) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod status;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand, USAGE};
pub use status::{run_clear, write_status};
pub use version::{version_line, VERSION};

use color_eyre::Result;

use crate::adapters::JsonFileStorage;
use crate::credentials::CredentialStore;
use crate::startup::StartupConfig;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(command: &CliCommand, config: &StartupConfig) -> Option<Result<()>> {
    let mut stdout = std::io::stdout();
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Status => {
            let mut store = CredentialStore::new(JsonFileStorage::new(config.resolve_data_dir()));
            Some(write_status(&mut store, &mut stdout))
        }
        CliCommand::Clear => {
            let mut store = CredentialStore::new(JsonFileStorage::new(config.resolve_data_dir()));
            Some(run_clear(&mut store, &mut stdout))
        }
        CliCommand::RunTui => None,
    }
}
