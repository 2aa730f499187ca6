//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// A value that contradicts the declared type of its feature.
///
/// Raised by the delta engine, the chart builder and the user summary when the
/// gateway hands back, say, free text inside a numerical column.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("expected a numeric value, got '{value}'")]
pub struct DataIntegrityError {
    pub value: String,
}

impl DataIntegrityError {
    pub fn not_numeric(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_messages() {
        let err = ValidationError::empty_field("user_id");
        assert_eq!(err.to_string(), "Field 'user_id' cannot be empty");

        let err = ValidationError::out_of_range("probability", 0.0, 1.0, 1.5);
        assert_eq!(
            err.to_string(),
            "Field 'probability' must be between 0 and 1, got 1.5"
        );
    }

    #[test]
    fn data_integrity_error_names_offending_value() {
        let err = DataIntegrityError::not_numeric("lots");
        assert_eq!(err.to_string(), "expected a numeric value, got 'lots'");
    }
}
