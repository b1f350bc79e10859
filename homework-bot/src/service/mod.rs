//! Service layer
//!
//! Services hold the notifier's business logic: deciding which records
//! are worth announcing and delivering the announcements.

mod notifier;
mod tracker;

pub use notifier::Notifier;
pub use tracker::{NotifyPolicy, StatusTracker};
