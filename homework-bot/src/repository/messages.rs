//! Messages repository
//!
//! Delivers chat messages through the bot API.

use async_trait::async_trait;
use homework_client::{Result, TelegramClient};

/// Repository trait for delivering text messages to the configured chat
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Sends one plain-text message
    async fn send(&self, text: &str) -> Result<()>;
}

/// Telegram implementation of MessageSink
pub struct TelegramMessageSink {
    client: TelegramClient,
}

impl TelegramMessageSink {
    /// Creates a new Telegram message sink
    pub fn new(client: TelegramClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageSink for TelegramMessageSink {
    async fn send(&self, text: &str) -> Result<()> {
        self.client.send_message(text).await
    }
}
