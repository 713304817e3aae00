//! `reviewdesk` - Customer review management
//!
//! This library records customer reviews in a local SQLite database, lists
//! and deletes them, and exports them to CSV. The [`form`] module holds the
//! interactive form logic independent of any terminal, and [`tui`] drives it
//! from the keyboard.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod logging;
pub mod review;
pub mod storage;
pub mod tui;

pub use config::Config;
pub use error::{Error, Result};
pub use form::{FormController, Notification, ReviewForm, ValidationError};
pub use logging::{init_file_logging, init_logging};
pub use review::{NewReview, Review};
pub use storage::{ReviewStore, Storage};
