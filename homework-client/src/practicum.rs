//! Homework review API client

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::error::Result;

/// HTTP client for the homework review API
///
/// Holds the endpoint URL and the OAuth token; every request is a GET with
/// a `from_date` lower bound.
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the homework statuses endpoint
    endpoint: String,
    /// OAuth token sent in the Authorization header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new review API client
    ///
    /// # Arguments
    /// * `endpoint` - URL of the homework statuses endpoint
    /// * `token` - OAuth token of the student
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses changed since `since` (unix seconds)
    ///
    /// Returns the decoded JSON body as-is; its shape is checked by
    /// `homework_core::extract_homeworks`. Fails on transport errors, any
    /// status other than 200, and bodies that are not JSON. Never retries.
    pub async fn fetch_updates(&self, since: i64) -> Result<Value> {
        tracing::debug!(from_date = since, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", since)])
            .send()
            .await?;

        crate::handle_response(response).await
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use crate::test_support::{closed_port, spawn_stub};
    use axum::extract::Query;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    const PATH: &str = "/api/user_api/homework_statuses/";

    async fn echo_statuses(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> Json<Value> {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Json(json!({
            "homeworks": [{"homework_name": "proj1", "status": "approved"}],
            "current_date": 1_700_000_000,
            "auth": auth,
            "from_date": params.get("from_date").cloned(),
        }))
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = PracticumClient::new("http://localhost/api", "secret-token");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-token"));
        assert_eq!(client.endpoint(), "http://localhost/api");
    }

    #[tokio::test]
    async fn test_fetch_updates_sends_token_and_timestamp() {
        let base = spawn_stub(Router::new().route(PATH, get(echo_statuses))).await;
        let client = PracticumClient::new(format!("{}{}", base, PATH), "abc123");

        let body = client.fetch_updates(1_699_999_000).await.unwrap();

        assert_eq!(body["auth"], "OAuth abc123");
        assert_eq!(body["from_date"], "1699999000");
        assert_eq!(body["homeworks"][0]["homework_name"], "proj1");
        assert_eq!(body["current_date"], 1_700_000_000);
    }

    #[tokio::test]
    async fn test_fetch_updates_non_ok_status() {
        let router = Router::new().route(
            PATH,
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        );
        let base = spawn_stub(router).await;
        let client = PracticumClient::new(format!("{}{}", base, PATH), "abc123");

        let err = client.fetch_updates(0).await.unwrap_err();

        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_updates_other_success_codes_fail() {
        let router = Router::new().route(PATH, get(|| async { StatusCode::NO_CONTENT }));
        let base = spawn_stub(router).await;
        let client = PracticumClient::new(format!("{}{}", base, PATH), "abc123");

        let err = client.fetch_updates(0).await.unwrap_err();
        assert_eq!(err.status(), Some(204));
    }

    #[tokio::test]
    async fn test_fetch_updates_invalid_json() {
        let router = Router::new().route(PATH, get(|| async { "<html>oops</html>" }));
        let base = spawn_stub(router).await;
        let client = PracticumClient::new(format!("{}{}", base, PATH), "abc123");

        let err = client.fetch_updates(0).await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_fetch_updates_connection_refused() {
        let base = closed_port().await;
        let client = PracticumClient::new(format!("{}{}", base, PATH), "abc123");

        let err = client.fetch_updates(0).await.unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed(_)));
    }
}
