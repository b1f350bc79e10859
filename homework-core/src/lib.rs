//! Homework Core
//!
//! Core types and rules for the homework review notifier.
//!
//! This crate contains:
//! - Domain types: homework records, API responses and review verdicts
//! - Validation: shape checks for the review API payload
//! - Formatting: turning a homework record into a chat message
//!
//! Everything here is pure; HTTP lives in `homework-client`.

pub mod domain;
pub mod error;
pub mod format;
pub mod validation;

pub use error::ValidationError;
pub use format::format_status_message;
pub use validation::{extract_homeworks, validate_response};
