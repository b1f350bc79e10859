//! Repository layer
//!
//! Repositories are thin seams over the HTTP clients. They expose only
//! what the poller needs, without any business logic.
//!
//! All repositories are trait-based to enable testing and mocking.

mod homeworks;
mod messages;

// Re-export traits
pub use homeworks::HomeworkSource;
pub use messages::MessageSink;

// Re-export implementations
pub use homeworks::HttpHomeworkSource;
pub use messages::TelegramMessageSink;
