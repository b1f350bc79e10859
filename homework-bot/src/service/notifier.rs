//! Notifier service
//!
//! Best-effort delivery of status messages. A failed send is logged and
//! dropped; it never reaches the poll loop.

use std::sync::Arc;

use tracing::{error, info};

use crate::repository::MessageSink;

/// Sends status messages to the configured chat
#[derive(Clone)]
pub struct Notifier {
    sink: Arc<dyn MessageSink>,
}

impl Notifier {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }

    /// Sends `message`, swallowing any delivery failure
    ///
    /// Returns whether the message was delivered.
    pub async fn notify(&self, message: &str) -> bool {
        match self.sink.send(message).await {
            Ok(()) => {
                info!("Bot sent message to chat");
                true
            }
            Err(e) => {
                error!(error = %e, status = ?e.status(), "Failed to send message via bot");
                false
            }
        }
    }
}
