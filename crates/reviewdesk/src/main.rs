//! `reviewdesk` - CLI for customer review management
//!
//! Without a subcommand this opens the interactive review form. The other
//! subcommands run a single store operation and exit.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::warn;

use reviewdesk::cli::{AddCommand, Cli, Command, ConfigCommand, ExportCommand};
use reviewdesk::form::parse_review_id;
use reviewdesk::tui::{self, FormApp};
use reviewdesk::{init_file_logging, init_logging, Config, FormController, ReviewStore, Storage};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let verbosity = cli.verbosity();
    let config_path = cli.config;
    let command = cli.command.unwrap_or(Command::Ui);

    // The form owns the terminal, so it logs to a file once its config is
    // known.
    if !matches!(command, Command::Ui) {
        init_logging(verbosity);
    }

    match command {
        Command::Ui => {
            let config = load_config(config_path)?;
            init_file_logging(verbosity, &config.log_file_path())?;
            handle_ui(&config)
        }
        Command::List(list_cmd) => handle_list(&load_config(config_path)?, list_cmd.json),
        Command::Add(add_cmd) => handle_add(&load_config(config_path)?, &add_cmd),
        Command::Delete(delete_cmd) => handle_delete(&load_config(config_path)?, &delete_cmd.id),
        Command::Export(export_cmd) => handle_export(&load_config(config_path)?, &export_cmd),
        // Not loaded up front: `path` and `validate` must work while the
        // active file is broken.
        Command::Config(config_cmd) => handle_config(config_path, config_cmd),
    }
}

fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<Config> {
    Config::load_from(config_path).context("failed to load configuration")
}

fn open_storage(config: &Config) -> anyhow::Result<Storage> {
    let path = config.database_path();
    Storage::open(&path).with_context(|| format!("failed to open {}", path.display()))
}

fn handle_ui(config: &Config) -> anyhow::Result<()> {
    let storage = open_storage(config)?;
    let mut app = FormApp::new(FormController::new(storage, config.export_path()));

    let outcome = tui::run(&mut app);
    app.into_controller().into_store().close()?;
    outcome?;
    Ok(())
}

fn handle_list(config: &Config, json: bool) -> anyhow::Result<()> {
    let storage = open_storage(config)?;
    let reviews = storage.display_reviews()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reviews)?);
    } else {
        for review in &reviews {
            print!("{}", review.display_block());
        }
    }
    Ok(())
}

fn handle_add(config: &Config, cmd: &AddCommand) -> anyhow::Result<()> {
    let review = match cmd.to_form().validate() {
        Ok(review) => review,
        Err(err) => bail!("{err}"),
    };

    let mut storage = open_storage(config)?;
    let id = storage.add_review(&review)?;
    println!("Review submitted successfully! (ID: {id})");
    Ok(())
}

fn handle_delete(config: &Config, raw_id: &str) -> anyhow::Result<()> {
    let id = match parse_review_id(raw_id) {
        Ok(id) => id,
        Err(err) => bail!("{err}"),
    };

    let mut storage = open_storage(config)?;
    if !storage.delete_review(id)? {
        warn!("No review with ID {id}");
    }
    println!("Review deleted successfully!");
    Ok(())
}

fn handle_export(config: &Config, cmd: &ExportCommand) -> anyhow::Result<()> {
    let path = cmd.output.clone().unwrap_or_else(|| config.export_path());
    let storage = open_storage(config)?;
    let written = storage.export_reviews_to_csv(&path)?;
    println!("Reviews exported to {} ({written} rows)", path.display());
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = load_config(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:  {}", config.database_path().display());
                println!();
                println!("[Export]");
                println!("  CSV path:       {}", config.export_path().display());
                println!();
                println!("[Logging]");
                println!("  Log file:       {}", config.log_file_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => bail!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
