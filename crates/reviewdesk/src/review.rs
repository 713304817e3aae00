//! Core review types for reviewdesk.
//!
//! A [`Review`] is one customer feedback record as stored in the `reviews`
//! table. A [`NewReview`] is the same record before the store has assigned
//! it an id.

use std::fmt;

use serde::Serialize;

/// Separator line appended after each review in the display pane.
pub const DISPLAY_SEPARATOR: &str = " -------------------------------------------";

/// A review that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    /// Customer first name.
    pub first_name: String,
    /// Customer last name.
    pub last_name: String,
    /// The item the review is about. May be empty.
    pub purchased_item: String,
    /// Rating as typed by the operator. No range is enforced.
    pub rating: i64,
    /// Free-text reason for the rating.
    pub reason: String,
}

impl NewReview {
    /// Create a new review payload.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        purchased_item: impl Into<String>,
        rating: i64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            purchased_item: purchased_item.into(),
            rating,
            reason: reason.into(),
        }
    }

    /// Attach a store-assigned id, producing a persisted [`Review`].
    #[must_use]
    pub fn with_id(self, id: i64) -> Review {
        Review {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            purchased_item: self.purchased_item,
            rating: self.rating,
            reason: self.reason,
        }
    }
}

/// A persisted customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    /// Store-assigned identifier; never reused after deletion.
    pub id: i64,
    /// Customer first name.
    pub first_name: String,
    /// Customer last name.
    pub last_name: String,
    /// The item the review is about.
    pub purchased_item: String,
    /// Rating value.
    pub rating: i64,
    /// Free-text reason for the rating.
    pub reason: String,
}

impl Review {
    /// Format this review as a block for the display pane.
    ///
    /// The block is the summary line followed by a separator line, each
    /// terminated by a newline.
    #[must_use]
    pub fn display_block(&self) -> String {
        format!("{self}\n{DISPLAY_SEPARATOR}\n")
    }

    /// The fields in export column order.
    #[must_use]
    pub fn to_record(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.purchased_item.clone(),
            self.rating.to_string(),
            self.reason.clone(),
        ]
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, First Name: {}, Last Name: {}, Purchased item, {} Rating: {}, Reason: {}",
            self.id, self.first_name, self.last_name, self.purchased_item, self.rating, self.reason
        )
    }
}
