//! Error types for the Immo core crate.
//!
//! The aggregation layer never fails; these errors belong to the boundaries
//! around it (record validation and dataset mutation).

use thiserror::Error;

use crate::validation::ValidationIssue;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// A single validation rule was violated.
    #[error("Validation error on '{field}': {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Several validation rules were violated.
    #[error(
        "{} validation errors, first: {}",
        .0.len(),
        .0.first().map(ToString::to_string).unwrap_or_default()
    )]
    MultipleValidationErrors(Vec<ValidationIssue>),

    /// A property with the same id already exists.
    #[error("Duplicate property id: {id}")]
    DuplicateProperty {
        /// The duplicated id.
        id: String,
    },

    /// No property with the given id.
    #[error("Property not found: {id}")]
    PropertyNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Invalid date string.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The offending value.
        value: String,
    },
}

impl CoreError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a duplicate property error.
    #[must_use]
    pub fn duplicate_property(id: impl Into<String>) -> Self {
        Self::DuplicateProperty { id: id.into() }
    }

    /// Creates a property not found error.
    #[must_use]
    pub fn property_not_found(id: impl Into<String>) -> Self {
        Self::PropertyNotFound { id: id.into() }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }
}
