//! Form state errors

use chrono::NaiveDate;
use thiserror::Error;

use super::FieldValidationError;

/// Errors raised by form state transitions and submission.
///
/// A rejected transition leaves the form unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A numeric input was not a whole number.
    #[error("{field}: expected a whole number, got {input:?}")]
    NotANumber { field: String, input: String },

    /// A value fell outside its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: u32,
        max: u32,
        value: u32,
    },

    /// Adding another line would exceed the bag's weight limit.
    #[error("cannot add more items: total weight {total_g} g has reached the maximum of {max_g} g")]
    WeightLimit { total_g: u32, max_g: u32 },

    /// A line index does not exist.
    #[error("no line at index {0}")]
    NoSuchLine(usize),

    /// A selected option is not among the offered options.
    #[error("{field}: {value:?} is not an available option")]
    UnknownOption { field: String, value: String },

    /// The field requires another field to be chosen first.
    #[error("{field} requires {depends_on} to be chosen first")]
    MissingDependency { field: String, depends_on: String },

    /// Dates before today cannot be picked.
    #[error("{0} is in the past")]
    PastDate(NaiveDate),

    /// Another delivery of the order is already on this date.
    #[error("a delivery is already scheduled on {0}")]
    DateTaken(NaiveDate),

    /// Extra charges only apply to deliveries moved off a delivery day.
    #[error("extra charges do not apply to this delivery date")]
    NoExtraCharges,

    /// One or more fields failed validation on submit.
    #[error("validation failed: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Invalid(Vec<FieldValidationError>),
}

impl FormError {
    /// Field errors carried by an `Invalid` error.
    pub fn field_errors(&self) -> &[FieldValidationError] {
        match self {
            Self::Invalid(errors) => errors,
            _ => &[],
        }
    }
}
