//! Homework poller
//!
//! Polls the review API for status changes and announces them in chat.
//! Cycles run strictly one after another; the only state carried between
//! them is the request timestamp and the status tracker.

use std::sync::Arc;

use homework_core::{extract_homeworks, format_status_message};
use tokio::time::{self, Duration};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::PollError;
use crate::repository::HomeworkSource;
use crate::service::{Notifier, StatusTracker};

/// Returns the current unix time in seconds
fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Poller that fetches status updates and forwards them to the notifier
pub struct HomeworkPoller {
    source: Arc<dyn HomeworkSource>,
    notifier: Notifier,
    tracker: StatusTracker,
    poll_interval: Duration,
    last_poll_timestamp: i64,
    clock: fn() -> i64,
}

impl HomeworkPoller {
    /// Creates a new poller
    pub fn new(config: &Config, source: Arc<dyn HomeworkSource>, notifier: Notifier) -> Self {
        Self {
            source,
            notifier,
            tracker: StatusTracker::new(config.notify_policy),
            poll_interval: config.poll_interval,
            last_poll_timestamp: config.from_date,
            clock: unix_now,
        }
    }

    /// Replaces the wall clock used to advance the request timestamp
    #[allow(dead_code)]
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Timestamp the next cycle will request updates from
    #[allow(dead_code)]
    pub fn last_poll_timestamp(&self) -> i64 {
        self.last_poll_timestamp
    }

    #[allow(dead_code)]
    pub fn tracker(&self) -> &StatusTracker {
        &self.tracker
    }

    /// Starts the polling loop
    ///
    /// Runs a cycle, then sleeps for the poll interval, until `shutdown`
    /// is cancelled. Cancellation is observed during the sleep, so an
    /// in-flight cycle always completes.
    pub async fn run(&mut self, shutdown: CancellationToken) {
        info!(
            "Starting homework poller (interval: {:?}, policy: {})",
            self.poll_interval,
            self.tracker.policy()
        );

        loop {
            self.run_cycle().await;

            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Shutdown requested, stopping poller");
                    break;
                }
                _ = time::sleep(self.poll_interval) => {}
            }
        }
    }

    /// Runs one cycle and advances the request timestamp
    ///
    /// Errors are logged and swallowed; the timestamp moves forward either way.
    pub async fn run_cycle(&mut self) {
        debug!("Polling for homework status updates");

        match self.poll_once().await {
            Ok(sent) => {
                if sent > 0 {
                    info!("Sent {} notification(s) this cycle", sent);
                }
            }
            Err(e) => {
                error!("Error during poll cycle: {}", e);
            }
        }

        self.last_poll_timestamp = (self.clock)();
    }

    /// Performs a single fetch-validate-notify pass
    ///
    /// Picked records are announced and remembered one at a time, in
    /// response order. The first record that fails to format ends the
    /// cycle; records before it stay announced, it and the ones after it
    /// are picked again next cycle if the API still reports them.
    /// Returns the number of delivered messages.
    pub async fn poll_once(&mut self) -> Result<usize, PollError> {
        let response = self.source.fetch_updates(self.last_poll_timestamp).await?;
        let homeworks = extract_homeworks(&response)?;

        if homeworks.is_empty() {
            info!("No changes in homework statuses");
            return Ok(0);
        }

        let selected = self.tracker.select(&homeworks);
        if selected.is_empty() {
            debug!("{} homework(s) reported, none changed", homeworks.len());
            return Ok(0);
        }

        let mut sent = 0;
        for record in selected {
            let message = format_status_message(record)?;
            if self.notifier.notify(&message).await {
                sent += 1;
            }
            self.tracker.commit(&[record]);
        }

        Ok(sent)
    }
}
