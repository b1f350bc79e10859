//! Scheduler layer for the notifier
//!
//! This layer runs the poll cycle on a fixed period: fetch statuses from
//! the review API, pick what changed, announce it, and wait for the next
//! tick.

pub mod poller;

pub use poller::HomeworkPoller;
