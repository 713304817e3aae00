//! CSV export of stored reviews.
//!
//! The file starts with a fixed six-column header and then carries one record
//! per review in storage order. Fields are quoted only when they contain a
//! delimiter, quote or line break.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::review::Review;

/// Header row written at the top of every export.
pub const CSV_HEADER: [&str; 6] = [
    "ID",
    "First Name",
    "Last Name",
    "Purchased item",
    "Rating",
    "Reason",
];

/// Writes the header and one record per review to the given writer.
///
/// Records are terminated with CRLF.
///
/// # Errors
///
/// Returns [`crate::Error::Csv`] if writing to the output fails.
pub fn write_reviews_csv<W: Write>(writer: W, reviews: &[Review]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for review in reviews {
        csv_writer.write_record(review.to_record())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes the export into it.
///
/// Returns the number of review records written, excluding the header.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written. A failure part
/// way through may leave a truncated file behind.
pub fn export_to_path(path: &Path, reviews: &[Review]) -> Result<usize> {
    debug!("Writing {} reviews to {}", reviews.len(), path.display());
    let file = File::create(path)?;
    write_reviews_csv(file, reviews)?;
    Ok(reviews.len())
}
