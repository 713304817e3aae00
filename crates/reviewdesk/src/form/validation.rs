//! Input validation for the review form.
//!
//! The rules are deliberately narrow: required text must be non-empty, and
//! numeric inputs must consist of decimal digits only.

use thiserror::Error;

use crate::review::NewReview;

/// A problem with what the operator typed.
///
/// The `Display` text is what the error dialog shows.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required review field is empty or the rating is not a number.
    #[error("Please fill in all fields correctly.")]
    InvalidReview,

    /// The delete-id input is not a number.
    #[error("Please enter a valid ID.")]
    InvalidId,
}

/// Check that `value` is non-empty and made only of ASCII decimal digits.
#[must_use]
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a digit-only string. Strings that overflow `i64` are rejected.
fn parse_digits(value: &str) -> Option<i64> {
    if is_digits(value) {
        value.parse().ok()
    } else {
        None
    }
}

/// Parse the delete-id input.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidId`] unless the input is a digit string
/// that fits in an `i64`.
pub fn parse_review_id(value: &str) -> Result<i64, ValidationError> {
    parse_digits(value).ok_or(ValidationError::InvalidId)
}

/// The five review inputs as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    /// First name input.
    pub first_name: String,
    /// Last name input.
    pub last_name: String,
    /// Purchased item input; not validated.
    pub purchased_item: String,
    /// Rating input, still as text.
    pub rating: String,
    /// Reason input.
    pub reason: String,
}

impl ReviewForm {
    /// Validate the inputs and convert them into a [`NewReview`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidReview`] if first name, last name or
    /// reason is empty, or if the rating is not a digit string.
    pub fn validate(&self) -> Result<NewReview, ValidationError> {
        if self.first_name.is_empty() || self.last_name.is_empty() || self.reason.is_empty() {
            return Err(ValidationError::InvalidReview);
        }
        let rating = parse_digits(&self.rating).ok_or(ValidationError::InvalidReview)?;

        Ok(NewReview::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.purchased_item.clone(),
            rating,
            self.reason.clone(),
        ))
    }

    /// Empty every input.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
