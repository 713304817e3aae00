//! Command-line interface for reviewdesk.
//!
//! This module provides the CLI structure for the `reviewdesk` binary.
//! Running it without a subcommand opens the interactive form.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AddCommand, ConfigCommand, DeleteCommand, ExportCommand, ListCommand};

/// reviewdesk - Customer Review Management
///
/// Record customer reviews in a local database, list and delete them, and
/// export them to CSV.
#[derive(Debug, Parser)]
#[command(name = "reviewdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to `ui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive review form
    Ui,

    /// Print all stored reviews
    List(ListCommand),

    /// Add a review
    Add(AddCommand),

    /// Delete a review by id
    Delete(DeleteCommand),

    /// Export all reviews to CSV
    Export(ExportCommand),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli_with(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "reviewdesk");
    }

    #[test]
    fn test_verbosity_levels() {
        use crate::logging::Verbosity;

        assert_eq!(cli_with(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(3, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli_with(2, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_no_subcommand_defaults_to_form() {
        let cli = Cli::try_parse_from(["reviewdesk"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_list_json() {
        let cli = Cli::try_parse_from(["reviewdesk", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::List(ListCommand { json: true }))));
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "reviewdesk",
            "add",
            "--first-name",
            "John",
            "--last-name",
            "Doe",
            "--rating",
            "5",
            "--reason",
            "great",
        ])
        .unwrap();
        let Some(Command::Add(add)) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(add.first_name, "John");
        assert_eq!(add.purchased_item, "");
    }

    #[test]
    fn test_parse_delete_keeps_raw_id() {
        let cli = Cli::try_parse_from(["reviewdesk", "delete", "abc"]).unwrap();
        let Some(Command::Delete(delete)) = cli.command else {
            panic!("expected delete command");
        };
        assert_eq!(delete.id, "abc");
    }

    #[test]
    fn test_parse_export_output() {
        let cli = Cli::try_parse_from(["reviewdesk", "export", "-o", "out.csv"]).unwrap();
        let Some(Command::Export(export)) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(export.output, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_parse_with_config() {
        let args = ["reviewdesk", "-c", "/custom/config.toml", "list"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["reviewdesk", "ui", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::Ui)));
    }
}
