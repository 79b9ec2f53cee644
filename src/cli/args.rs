//! Command-line argument parsing for chatdeck.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print stored credential status
    Status,
    /// Remove stored credentials
    Clear,
    /// Run the TUI application (default)
    RunTui,
}

/// Command plus global options.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--data-dir <path>`
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: chatdeck [OPTIONS]

Options:
  --status            Print stored credential status and exit
  --clear             Remove stored credentials and exit
  --data-dir <PATH>   Directory holding settings.json and chatdeck.log
  -V, --version       Print version and exit
  -h, --help          Print this help and exit

Environment:
  CHATDECK_HOME       Data directory (default ~/.chatdeck)
  CHATDECK_LOG        Log filter (default chatdeck=info)";

/// Parse command-line arguments.
///
/// The first command flag wins; unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use chatdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["chatdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut command = None;
    let mut data_dir = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let parsed = match arg.as_str() {
            "--version" | "-V" => Some(CliCommand::Version),
            "--help" | "-h" => Some(CliCommand::Help),
            "--status" => Some(CliCommand::Status),
            "--clear" => Some(CliCommand::Clear),
            "--data-dir" => {
                let value = args
                    .next()
                    .filter(|v| !v.is_empty())
                    .ok_or(ArgsError::MissingValue("--data-dir"))?;
                data_dir = Some(PathBuf::from(value));
                None
            }
            other => {
                if let Some(value) = other.strip_prefix("--data-dir=") {
                    if value.is_empty() {
                        return Err(ArgsError::MissingValue("--data-dir"));
                    }
                    data_dir = Some(PathBuf::from(value));
                }
                None
            }
        };
        if command.is_none() {
            command = parsed;
        }
    }

    Ok(CliArgs {
        command: command.unwrap_or(CliCommand::RunTui),
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, ArgsError> {
        let mut all = vec!["chatdeck".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]).unwrap().command, CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap().command, CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]).unwrap().command, CliCommand::Help);
    }

    #[test]
    fn test_parse_status_and_clear() {
        assert_eq!(parse(&["--status"]).unwrap().command, CliCommand::Status);
        assert_eq!(parse(&["--clear"]).unwrap().command, CliCommand::Clear);
    }

    #[test]
    fn test_parse_no_args() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.command, CliCommand::RunTui);
        assert!(args.data_dir.is_none());
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]).unwrap().command, CliCommand::RunTui);
    }

    #[test]
    fn test_first_command_wins() {
        assert_eq!(
            parse(&["--status", "--clear"]).unwrap().command,
            CliCommand::Status
        );
    }

    #[test]
    fn test_parse_data_dir() {
        let args = parse(&["--data-dir", "/tmp/deck", "--status"]).unwrap();
        assert_eq!(args.command, CliCommand::Status);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/deck")));

        let args = parse(&["--data-dir=/srv/deck"]).unwrap();
        assert_eq!(args.command, CliCommand::RunTui);
        assert_eq!(args.data_dir, Some(PathBuf::from("/srv/deck")));
    }

    #[test]
    fn test_data_dir_requires_value() {
        assert_eq!(
            parse(&["--data-dir"]),
            Err(ArgsError::MissingValue("--data-dir"))
        );
        assert_eq!(
            parse(&["--data-dir="]),
            Err(ArgsError::MissingValue("--data-dir"))
        );
    }
}
