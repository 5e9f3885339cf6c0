//! Validation error types

use std::fmt;

/// Validation error for submitted sales
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required field is absent, null, or blank
    Missing { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Numeric field is NaN or infinite
    NotFinite { field: &'static str },

    /// Body could not be parsed into a submission
    Malformed { reason: String },
}

impl ValidationError {
    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Missing { field } | Self::TooLong { field, .. } | Self::NotFinite { field } => {
                Some(*field)
            }
            Self::Malformed { .. } => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::NotFinite { field } => write!(f, "{} must be a finite number", field),
            Self::Malformed { reason } => write!(f, "malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
