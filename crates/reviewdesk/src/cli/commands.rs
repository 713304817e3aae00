//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::form::ReviewForm;

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Add command arguments.
///
/// Values go through the same checks as the form's Submit button.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Customer first name
    #[arg(long)]
    pub first_name: String,

    /// Customer last name
    #[arg(long)]
    pub last_name: String,

    /// Purchased item
    #[arg(long, default_value = "")]
    pub purchased_item: String,

    /// Rating (digits only)
    #[arg(long)]
    pub rating: String,

    /// Reason for the rating
    #[arg(long)]
    pub reason: String,
}

impl AddCommand {
    /// The arguments as form input.
    #[must_use]
    pub fn to_form(&self) -> ReviewForm {
        ReviewForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            purchased_item: self.purchased_item.clone(),
            rating: self.rating.clone(),
            reason: self.reason.clone(),
        }
    }
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Id of the review to delete (digits only)
    pub id: String,
}

/// Export command arguments.
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Write to this file instead of the configured export path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
