//! Homework Review Notifier
//!
//! Polls the homework review API on a fixed interval and announces review
//! status changes in a Telegram chat.
//!
//! Architecture:
//! - Configuration: secrets and tunables from the environment (and `.env`)
//! - Repositories: seams over the review API and bot API clients
//! - Services: change tracking and best-effort notification
//! - Scheduler: the poll loop
//!
//! Nothing is persisted; a restart announces every current status again.

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, ConfigError};
use crate::repository::{HttpHomeworkSource, TelegramMessageSink};
use crate::scheduler::HomeworkPoller;
use crate::service::Notifier;
use homework_client::{PracticumClient, TelegramClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=info,homework_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting homework review notifier");

    // Load configuration; nothing touches the network before this succeeds
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(severity = "critical", "Refusing to start: {}", e);
            return Err(e.into());
        }
    };
    info!(
        "Loaded configuration: endpoint={}, chat_id={}, interval={:?}",
        config.practicum_endpoint, config.telegram_chat_id, config.poll_interval
    );

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let practicum = PracticumClient::with_client(
        config.practicum_endpoint.clone(),
        config.practicum_token.clone(),
        http.clone(),
    );
    let telegram = TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
        http,
    );

    let source = Arc::new(HttpHomeworkSource::new(practicum));
    let notifier = Notifier::new(Arc::new(TelegramMessageSink::new(telegram)));
    let mut poller = HomeworkPoller::new(&config, source, notifier);

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(shutdown.clone()));

    poller.run(shutdown).await;

    info!("Notifier stopped");
    Ok(())
}

/// Loads and validates configuration from the environment
fn load_config() -> Result<Config, ConfigError> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Cancels `shutdown` once the process receives Ctrl-C
async fn cancel_on_ctrl_c(shutdown: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("Received Ctrl-C");
            shutdown.cancel();
        }
        Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
    }
}
