//! Homework statuses repository
//!
//! Fetches raw status payloads from the review API.

use async_trait::async_trait;
use homework_client::{PracticumClient, Result};
use serde_json::Value;

/// Repository trait for reading homework statuses
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetches the raw status payload for changes since `since`
    ///
    /// # Arguments
    /// * `since` - Lower bound of the update window, in unix seconds
    async fn fetch_updates(&self, since: i64) -> Result<Value>;
}

/// HTTP implementation of HomeworkSource
pub struct HttpHomeworkSource {
    client: PracticumClient,
}

impl HttpHomeworkSource {
    /// Creates a new HTTP homework source
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkSource for HttpHomeworkSource {
    async fn fetch_updates(&self, since: i64) -> Result<Value> {
        self.client.fetch_updates(since).await
    }
}
