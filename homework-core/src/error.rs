//! Validation error types

use thiserror::Error;

/// Errors raised while checking review API payloads
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The response as a whole has the wrong shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A homework record lacks a required field
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A homework record has a required field of the wrong type
    #[error("Invalid field: {field} must be a string")]
    InvalidField { field: &'static str },

    /// A homework record carries a status outside the catalog
    #[error("Unknown status: {0}")]
    UnknownStatus(String),
}

impl ValidationError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse(reason.into())
    }
}
