//! Core domain types
//!
//! These types describe what the review API hands back and are shared
//! between the HTTP client (which fetches them) and the bot (which reports
//! on them).

pub mod homework;
pub mod status;

pub use homework::{ApiResponse, HomeworkRecord};
pub use status::StatusVerdict;
