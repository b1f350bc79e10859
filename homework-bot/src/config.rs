//! Notifier configuration
//!
//! Credentials and tunables are read once at startup, validated, and then
//! handed to the clients and the poller by reference.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::service::NotifyPolicy;

/// Default homework statuses endpoint of the review API
pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = homework_client::DEFAULT_TELEGRAM_API_URL;

/// Variables that must be present for the notifier to start
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required variables are absent or empty
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    /// A variable is present but unusable
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Notifier configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Bot token for the Telegram Bot API
    pub telegram_token: String,

    /// Chat that receives status updates
    pub telegram_chat_id: String,

    /// Review API homework statuses endpoint
    pub practicum_endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between poll cycles
    pub poll_interval: Duration,

    /// Per-request timeout for both HTTP clients
    pub request_timeout: Duration,

    /// Timestamp (unix seconds) the first poll asks for updates from
    pub from_date: i64,

    /// Which records of a response get announced
    pub notify_policy: NotifyPolicy,
}

impl Config {
    /// Creates a new configuration with defaults for everything but the secrets
    pub fn new(
        practicum_token: impl Into<String>,
        telegram_token: impl Into<String>,
        telegram_chat_id: impl Into<String>,
    ) -> Self {
        Self {
            practicum_token: practicum_token.into(),
            telegram_token: telegram_token.into(),
            telegram_chat_id: telegram_chat_id.into(),
            practicum_endpoint: DEFAULT_PRACTICUM_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            poll_interval: Duration::from_secs(600),
            request_timeout: Duration::from_secs(30),
            from_date: 0,
            notify_policy: NotifyPolicy::default(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: public review API)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_TIME (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    /// - FROM_DATE (optional, unix seconds, default: 0)
    /// - NOTIFY_POLICY (optional, `diff-all` or `newest-only`, default: diff-all)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Every missing secret is reported at once. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|&key| get(key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let mut config = Self::new(
            get("PRACTICUM_TOKEN").unwrap_or_default(),
            get("TELEGRAM_TOKEN").unwrap_or_default(),
            get("TELEGRAM_CHAT_ID").unwrap_or_default(),
        );

        if let Some(endpoint) = get("PRACTICUM_ENDPOINT") {
            config.practicum_endpoint = endpoint;
        }
        if let Some(api_url) = get("TELEGRAM_API_URL") {
            config.telegram_api_url = api_url;
        }
        if let Some(secs) = parse_var::<u64>(&get, "RETRY_TIME")? {
            config.poll_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64>(&get, "REQUEST_TIMEOUT")? {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(from_date) = parse_var::<i64>(&get, "FROM_DATE")? {
            config.from_date = from_date;
        }
        if let Some(policy) = parse_var::<NotifyPolicy>(&get, "NOTIFY_POLICY")? {
            config.notify_policy = policy;
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, url) in [
            ("PRACTICUM_ENDPOINT", &self.practicum_endpoint),
            ("TELEGRAM_API_URL", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::invalid(key, "must start with http:// or https://"));
            }
        }

        if self.poll_interval.as_secs() == 0 {
            return Err(ConfigError::invalid("RETRY_TIME", "must be greater than 0"));
        }

        if self.request_timeout.as_secs() == 0 {
            return Err(ConfigError::invalid("REQUEST_TIMEOUT", "must be greater than 0"));
        }

        Ok(())
    }
}

fn parse_var<T>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::invalid(key, e.to_string()))
        })
        .transpose()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .field("from_date", &self.from_date)
            .field("notify_policy", &self.notify_policy)
            .finish()
    }
}
