//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions. Only the store's mutation entry points
//! produce validation errors; the aggregation engine is total.

use std::fmt;

use thiserror::Error;

/// The input field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationField {
    Amount,
    Category,
    Description,
    Budget,
}

impl ValidationField {
    /// The field name as presented to callers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Description => "description",
            Self::Budget => "budget",
        }
    }
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Malformed input rejected at a mutation entry point
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: ValidationField,
        reason: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl TrackerError {
    /// Create a validation error for the given field
    pub fn validation(field: ValidationField, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The offending field, if this is a validation error
    pub fn field(&self) -> Option<ValidationField> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = TrackerError::validation(ValidationField::Amount, "must be greater than zero");
        assert_eq!(err.to_string(), "Invalid amount: must be greater than zero");
        assert!(err.is_validation());
        assert_eq!(err.field(), Some(ValidationField::Amount));
    }

    #[test]
    fn test_config_error_has_no_field() {
        let err = TrackerError::Config("bad currency".into());
        assert_eq!(err.to_string(), "Configuration error: bad currency");
        assert!(!err.is_validation());
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
