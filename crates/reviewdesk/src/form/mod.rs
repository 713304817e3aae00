//! Review form controller.
//!
//! [`FormController`] holds what the operator has typed plus the text of the
//! review pane, and turns the four form actions (submit, export, display,
//! delete) into calls on an injected [`ReviewStore`].
//!
//! Each action has two failure tiers:
//!
//! - Input mistakes are reported as an error [`Notification`]; the store is
//!   not touched and the typed text is kept.
//! - Store failures are returned as `Err` and abort the action.

mod validation;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::storage::ReviewStore;

pub use validation::{is_digits, parse_review_id, ReviewForm, ValidationError};

/// Title of the form window.
pub const WINDOW_TITLE: &str = "Customer Review Management";

/// Default export file name, relative to the working directory.
pub const DEFAULT_EXPORT_FILE: &str = "new_customer_reviews.csv";

/// A text input on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Customer first name.
    FirstName,
    /// Customer last name.
    LastName,
    /// Purchased item.
    PurchasedItem,
    /// Rating.
    Rating,
    /// Reason for the rating.
    Reason,
    /// Id of the review to delete.
    DeleteId,
}

impl Field {
    /// The review inputs in form order.
    pub const REVIEW_FIELDS: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::PurchasedItem,
        Self::Rating,
        Self::Reason,
    ];

    /// Label shown next to the input.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name:",
            Self::LastName => "Last Name:",
            Self::PurchasedItem => "Purchased item:",
            Self::Rating => "Rating (1-5):",
            Self::Reason => "Reason:",
            Self::DeleteId => "Review ID to delete:",
        }
    }
}

/// Severity of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// The action completed.
    Success,
    /// The action was rejected because of bad input.
    Error,
}

/// Content of a blocking message dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Dialog message.
    pub message: String,
}

impl Notification {
    /// A success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// An error notification for rejected input.
    #[must_use]
    pub fn invalid(err: ValidationError) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: err.to_string(),
        }
    }

    /// Dialog title for this notification.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.level {
            NotificationLevel::Success => "Success",
            NotificationLevel::Error => "Error",
        }
    }

    /// Check if this notification reports rejected input.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Controller behind the review form.
///
/// Owns the store for as long as the form is open; [`Self::into_store`] hands
/// it back for an orderly shutdown.
#[derive(Debug)]
pub struct FormController<S> {
    store: S,
    export_path: PathBuf,
    review: ReviewForm,
    delete_id: String,
    pane: String,
}

impl<S: ReviewStore> FormController<S> {
    /// Create a controller over `store` that exports to `export_path`.
    pub fn new(store: S, export_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            export_path: export_path.into(),
            review: ReviewForm::default(),
            delete_id: String::new(),
            pane: String::new(),
        }
    }

    /// Current text of an input.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.review.first_name,
            Field::LastName => &self.review.last_name,
            Field::PurchasedItem => &self.review.purchased_item,
            Field::Rating => &self.review.rating,
            Field::Reason => &self.review.reason,
            Field::DeleteId => &self.delete_id,
        }
    }

    /// Mutable access to an input's text.
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.review.first_name,
            Field::LastName => &mut self.review.last_name,
            Field::PurchasedItem => &mut self.review.purchased_item,
            Field::Rating => &mut self.review.rating,
            Field::Reason => &mut self.review.reason,
            Field::DeleteId => &mut self.delete_id,
        }
    }

    /// Replace an input's text.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Text of the review pane.
    #[must_use]
    pub fn pane(&self) -> &str {
        &self.pane
    }

    /// Where Export writes its file.
    #[must_use]
    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// The injected store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the controller and return its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Validate the review inputs and store the review.
    ///
    /// On success every review input is cleared. On invalid input nothing is
    /// stored and the inputs are left as typed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the insert.
    pub fn submit(&mut self) -> Result<Notification> {
        let review = match self.review.validate() {
            Ok(review) => review,
            Err(err) => {
                debug!("Rejected review submission: {err}");
                return Ok(Notification::invalid(err));
            }
        };

        let id = self.store.add_review(&review)?;
        info!("Submitted review {}", id);
        self.review.clear();
        Ok(Notification::success("Review submitted successfully!"))
    }

    /// Export every review to the configured CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the reviews or writing the file fails; no
    /// success notification is produced in that case.
    pub fn export(&mut self) -> Result<Notification> {
        self.store.export_reviews_to_csv(&self.export_path)?;
        Ok(Notification::success(format!(
            "Reviews exported to {}",
            self.export_path.display()
        )))
    }

    /// Rebuild the review pane from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read. The pane is left
    /// untouched in that case.
    pub fn display(&mut self) -> Result<()> {
        let reviews = self.store.display_reviews()?;
        self.pane = reviews.iter().map(crate::Review::display_block).collect();
        debug!("Displaying {} reviews", reviews.len());
        Ok(())
    }

    /// Delete the review named by the delete-id input, then refresh the pane.
    ///
    /// Success is reported whether or not a review with that id existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete or the following refresh fails.
    pub fn delete(&mut self) -> Result<Notification> {
        let id = match parse_review_id(&self.delete_id) {
            Ok(id) => id,
            Err(err) => {
                debug!("Rejected delete id {:?}", self.delete_id);
                return Ok(Notification::invalid(err));
            }
        };

        if !self.store.delete_review(id)? {
            warn!("Delete requested for unknown review id {}", id);
        }
        self.delete_id.clear();
        self.display()?;
        Ok(Notification::success("Review deleted successfully!"))
    }
}
