//! `SQLite` schema definitions for reviewdesk.
//!
//! The schema is a single table and is created on first open. There is no
//! versioning: an existing table is used as-is.

use rusqlite::Connection;

use crate::error::Result;

/// SQL statement to create the reviews table.
pub const CREATE_REVIEWS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    purchased_item TEXT NOT NULL,
    rating INTEGER NOT NULL,
    reason TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_REVIEWS_TABLE];

/// Create the schema if it does not exist yet.
///
/// # Errors
///
/// Returns an error if any creation statement fails.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    for statement in SCHEMA_STATEMENTS {
        conn.execute(statement, [])?;
    }
    Ok(())
}
