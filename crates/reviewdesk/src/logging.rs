//! Logging configuration for reviewdesk.
//!
//! This module provides initialization and configuration for the tracing-based
//! logging system used throughout reviewdesk. Command-line subcommands log to
//! stderr; the interactive form logs to a file because it owns the terminal.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Suppress all output except errors.
    Quiet,
    /// Normal output level (info and above).
    #[default]
    Normal,
    /// Verbose output (debug and above).
    Verbose,
    /// Very verbose output (trace level).
    Trace,
}

impl Verbosity {
    /// Convert verbosity to tracing level filter.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Build the filter for `verbosity`, letting `RUST_LOG` take precedence.
fn env_filter(verbosity: Verbosity) -> EnvFilter {
    let default_filter = format!("reviewdesk={}", verbosity.to_level_filter());
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize logging to stderr.
///
/// This should be called once at application startup. The logging level can be
/// controlled via:
/// 1. The `verbosity` parameter
/// 2. The `RUST_LOG` environment variable (takes precedence)
///
/// # Examples
///
/// ```no_run
/// use reviewdesk::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let subscriber = tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        );

    // Install the subscriber (ignore error if already set)
    let _ = subscriber.try_init();
}

/// Initialize logging to an append-only file.
///
/// Used while the interactive form owns the terminal. Parent directories are
/// created as needed.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created.
pub fn init_file_logging(verbosity: Verbosity, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        );

    let _ = subscriber.try_init();
    Ok(())
}

/// Initialize logging for tests.
///
/// This sets up a minimal logging configuration suitable for tests.
/// It only logs warnings and errors by default to keep test output clean.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_to_level() {
        assert_eq!(Verbosity::Quiet.to_level_filter(), Level::ERROR);
        assert_eq!(Verbosity::Normal.to_level_filter(), Level::INFO);
        assert_eq!(Verbosity::Verbose.to_level_filter(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.to_level_filter(), Level::TRACE);
    }

    #[test]
    fn test_verbosity_default() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_init_logging_does_not_panic() {
        // Only the first initialization in the test binary takes effect.
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Trace);
    }

    #[test]
    fn test_init_file_logging_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("logs").join("reviewdesk.log");

        init_file_logging(Verbosity::Normal, &log_path).unwrap();
        assert!(log_path.exists());
    }

    #[test]
    fn test_init_file_logging_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a log file.
        let result = init_file_logging(Verbosity::Normal, dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_init_test_logging_does_not_panic() {
        init_test_logging();
    }
}
