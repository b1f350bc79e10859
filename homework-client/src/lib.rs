//! Homework HTTP Clients
//!
//! Type-safe HTTP clients for the two remote services the notifier talks to:
//!
//! - [`PracticumClient`]: the homework review API (source of status updates)
//! - [`TelegramClient`]: the Telegram Bot API (sink for notifications)
//!
//! Both clients share one error type and one response handling path.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "my-token",
//!     );
//!
//!     let response = client.fetch_updates(0).await?;
//!     println!("{}", response);
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::PracticumClient;
pub use telegram::{DEFAULT_TELEGRAM_API_URL, TelegramClient};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Handle an API response and deserialize JSON
///
/// Anything other than 200 OK is an error carrying the response body.
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if status != StatusCode::OK {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}
