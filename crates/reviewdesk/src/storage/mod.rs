//! Storage layer for reviewdesk.
//!
//! This module provides the [`ReviewStore`] capability surface and its
//! `SQLite`-backed implementation, [`Storage`].

pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::export;
use crate::review::{NewReview, Review};

/// Operations the form controller needs from a review store.
///
/// Every operation either completes or returns an error. Errors are system
/// failures (database, file system); input validation happens before a call
/// reaches the store.
pub trait ReviewStore {
    /// Insert a review and return the id assigned to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. A failed write leaves no trace.
    fn add_review(&mut self, review: &NewReview) -> Result<i64>;

    /// Return every stored review in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn display_reviews(&self) -> Result<Vec<Review>>;

    /// Delete the review with the given id.
    ///
    /// Returns `true` if a review was removed, `false` if none matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete_review(&mut self, id: i64) -> Result<bool>;

    /// Write every stored review to a CSV file at `path`, replacing it.
    ///
    /// Returns the number of review records written.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the reviews or writing the file fails.
    fn export_reviews_to_csv(&self, path: &Path) -> Result<usize> {
        let reviews = self.display_reviews()?;
        export::export_to_path(path, &reviews)
    }
}

/// `SQLite`-backed review storage.
///
/// Holds the one connection used for the lifetime of the application.
#[derive(Debug)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Storage {
    /// Open or create a storage database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist,
    /// and creates the reviews table if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema creation fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        schema::initialize_schema(&conn)?;

        info!("Database opened successfully at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        schema::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Count the stored reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Close the connection, reporting any error from the engine.
    ///
    /// Dropping a `Storage` also closes the connection but discards the error.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` refuses to close the connection.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, err)| Error::DatabaseQuery(err))?;
        info!("Database closed at {}", path.display());
        Ok(())
    }

    /// Convert a database row to a Review struct.
    fn row_to_review(row: &rusqlite::Row) -> rusqlite::Result<Review> {
        Ok(Review {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            purchased_item: row.get(3)?,
            rating: row.get(4)?,
            reason: row.get(5)?,
        })
    }
}

impl ReviewStore for Storage {
    fn add_review(&mut self, review: &NewReview) -> Result<i64> {
        let tx = self.conn.transaction()?;
        tx.execute(
            r"
            INSERT INTO reviews (first_name, last_name, purchased_item, rating, reason)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
            params![
                review.first_name,
                review.last_name,
                review.purchased_item,
                review.rating,
                review.reason,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!("Inserted review with id {}", id);
        Ok(id)
    }

    fn display_reviews(&self) -> Result<Vec<Review>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT id, first_name, last_name, purchased_item, rating, reason
            FROM reviews ORDER BY id
            ",
        )?;

        let reviews = stmt
            .query_map([], Self::row_to_review)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(reviews)
    }

    fn delete_review(&mut self, id: i64) -> Result<bool> {
        let tx = self.conn.transaction()?;
        let affected = tx.execute("DELETE FROM reviews WHERE id = ?1", [id])?;
        tx.commit()?;

        if affected > 0 {
            info!("Deleted review {}", id);
        } else {
            debug!("No review with id {} to delete", id);
        }
        Ok(affected > 0)
    }

    fn export_reviews_to_csv(&self, path: &Path) -> Result<usize> {
        let reviews = self.display_reviews()?;
        let written = export::export_to_path(path, &reviews)?;
        info!("Exported {} reviews to {}", written, path.display());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_storage() -> Storage {
        Storage::open_in_memory().expect("failed to create test storage")
    }

    fn create_test_review(first_name: &str) -> NewReview {
        NewReview::new(first_name, "Doe", "Widget", 5, "great")
    }

    #[test]
    fn test_open_in_memory() {
        let storage = Storage::open_in_memory();
        assert!(storage.is_ok());
    }

    #[test]
    fn test_add_and_display() {
        let mut storage = create_test_storage();
        let id = storage.add_review(&create_test_review("John")).unwrap();
        assert_eq!(id, 1);

        let reviews = storage.display_reviews().unwrap();
        assert_eq!(reviews, vec![create_test_review("John").with_id(1)]);
    }

    #[test]
    fn test_display_empty_store() {
        let storage = create_test_storage();
        assert!(storage.display_reviews().unwrap().is_empty());
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut storage = create_test_storage();
        let mut previous = 0;
        for name in ["A", "B", "C", "D"] {
            let id = storage.add_review(&create_test_review(name)).unwrap();
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut storage = create_test_storage();
        storage.add_review(&create_test_review("A")).unwrap();
        let second = storage.add_review(&create_test_review("B")).unwrap();

        assert!(storage.delete_review(second).unwrap());
        let third = storage.add_review(&create_test_review("C")).unwrap();
        assert!(third > second);
    }

    #[test]
    fn test_display_in_insertion_order() {
        let mut storage = create_test_storage();
        for name in ["Zed", "Amy", "Mia"] {
            storage.add_review(&create_test_review(name)).unwrap();
        }

        let names: Vec<String> = storage
            .display_reviews()
            .unwrap()
            .into_iter()
            .map(|r| r.first_name)
            .collect();
        assert_eq!(names, vec!["Zed", "Amy", "Mia"]);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let mut storage = create_test_storage();
        let keep = storage.add_review(&create_test_review("Keep")).unwrap();
        let remove = storage.add_review(&create_test_review("Remove")).unwrap();

        assert!(storage.delete_review(remove).unwrap());

        let reviews = storage.display_reviews().unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].id, keep);
    }

    #[test]
    fn test_delete_nonexistent_is_noop() {
        let mut storage = create_test_storage();
        storage.add_review(&create_test_review("John")).unwrap();

        assert!(!storage.delete_review(99999).unwrap());
        assert_eq!(storage.count().unwrap(), 1);
    }

    #[test]
    fn test_count() {
        let mut storage = create_test_storage();
        assert_eq!(storage.count().unwrap(), 0);

        storage.add_review(&create_test_review("One")).unwrap();
        storage.add_review(&create_test_review("Two")).unwrap();

        assert_eq!(storage.count().unwrap(), 2);
    }

    #[test]
    fn test_large_rating_accepted() {
        let mut storage = create_test_storage();
        let review = NewReview::new("John", "Doe", "Widget", 999, "great");
        let id = storage.add_review(&review).unwrap();
        assert_eq!(storage.display_reviews().unwrap()[0], review.with_id(id));
    }

    #[test]
    fn test_unicode_fields() {
        let mut storage = create_test_storage();
        let review = NewReview::new("Zoë", "Müller", "Café ☕", 4, "très bien");
        storage.add_review(&review).unwrap();

        let stored = &storage.display_reviews().unwrap()[0];
        assert_eq!(stored.first_name, "Zoë");
        assert_eq!(stored.purchased_item, "Café ☕");
    }

    #[test]
    fn test_export_after_inserts_and_deletes() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("reviews.csv");
        let mut storage = create_test_storage();

        let mut ids = Vec::new();
        for name in ["A", "B", "C", "D", "E"] {
            ids.push(storage.add_review(&create_test_review(name)).unwrap());
        }
        storage.delete_review(ids[1]).unwrap();
        storage.delete_review(ids[3]).unwrap();

        let written = storage.export_reviews_to_csv(&csv_path).unwrap();
        assert_eq!(written, 3);

        let contents = std::fs::read_to_string(&csv_path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1 + 3);
        assert_eq!(lines[0], "ID,First Name,Last Name,Purchased item,Rating,Reason");
        assert_eq!(lines[1], format!("{},A,Doe,Widget,5,great", ids[0]));
        assert_eq!(lines[2], format!("{},C,Doe,Widget,5,great", ids[2]));
        assert_eq!(lines[3], format!("{},E,Doe,Widget,5,great", ids[4]));
    }

    #[test]
    fn test_path() {
        let storage = create_test_storage();
        assert_eq!(storage.path().to_string_lossy(), ":memory:");
    }

    #[test]
    fn test_open_file_based_persists() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("new_customer_service.db");

        let mut storage = Storage::open(&db_path).unwrap();
        storage.add_review(&create_test_review("John")).unwrap();
        assert_eq!(storage.path(), db_path);
        storage.close().unwrap();

        let reopened = Storage::open(&db_path).unwrap();
        assert_eq!(reopened.count().unwrap(), 1);
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let nested_path = dir.path().join("nested").join("deeper").join("reviews.db");

        let storage = Storage::open(&nested_path).unwrap();
        assert!(nested_path.exists());
        storage.close().unwrap();
    }
}
