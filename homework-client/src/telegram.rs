//! Telegram Bot API client

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Public Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Client for sending messages to one chat via the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token issued by BotFather
    token: String,
    /// Destination chat identifier
    chat_id: String,
    /// HTTP client instance
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a client for the public Bot API
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_TELEGRAM_API_URL, token, chat_id, Client::new())
    }

    /// Create a client with a custom API base URL and HTTP client
    pub fn with_client(
        api_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            client,
        }
    }

    /// Get the API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Get the destination chat identifier
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Send a plain-text message to the configured chat
    ///
    /// Fails on transport errors, non-200 responses, and responses where
    /// the Bot API reports `ok: false`.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await?;

        let body: BotApiResponse = crate::handle_response(response).await?;
        if !body.ok {
            return Err(ClientError::Rejected(
                body.description
                    .unwrap_or_else(|| "no description".to_string()),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
