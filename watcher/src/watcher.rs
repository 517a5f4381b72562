//! The poll loop: fetch, validate, render, notify, wait, repeat.

use std::time::Duration;

use serde_json::Value;
use tracing::{error, info};

use clients_practicum::{ApiError, PracticumClient};
use clients_telegrambot::{DeliveryError, TelegramBot};

use crate::catalog::{render_status, UnknownStatusError};
use crate::clock::Clock;
use crate::config::WatcherConfig;
use crate::types::{extract_homeworks, ValidationError};

/// Where homework status updates come from.
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    /// Fetches the decoded response body for updates at or after `since`
    /// (Unix seconds).
    async fn fetch(&self, since: i64) -> Result<Value, ApiError>;
}

impl StatusSource for PracticumClient {
    async fn fetch(&self, since: i64) -> Result<Value, ApiError> {
        PracticumClient::fetch(self, since).await
    }
}

/// Where rendered messages go.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    /// Delivers `text` to the destination chat.
    async fn notify(&self, text: &str) -> Result<(), DeliveryError>;
}

impl Notifier for TelegramBot {
    async fn notify(&self, text: &str) -> Result<(), DeliveryError> {
        self.push_message(text).await
    }
}

/// Everything that can cut one poll cycle short.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatusError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Fixed-interval watcher over the review API.
///
/// The only mutable state is the poll window start and the text of the last
/// delivered notification; everything else is recomputed every cycle.
pub struct HomeworkWatcher<S, N, C> {
    source: S,
    notifier: N,
    clock: C,
    retry_interval: Duration,
    last_timestamp: i64,
    last_status_text: String,
}

impl<S, N, C> HomeworkWatcher<S, N, C>
where
    S: StatusSource,
    N: Notifier,
    C: Clock,
{
    /// Creates a watcher whose poll window starts at the current clock
    /// reading, so only updates from launch onward are reported.
    pub fn new(config: WatcherConfig, source: S, notifier: N, clock: C) -> Self {
        let last_timestamp = clock.now();
        Self {
            source,
            notifier,
            clock,
            retry_interval: config.retry_interval,
            last_timestamp,
            last_status_text: String::new(),
        }
    }

    /// Runs poll cycles until the process is terminated.
    pub async fn run(&mut self) {
        info!(
            interval_secs = self.retry_interval.as_secs(),
            "entering poll loop"
        );
        loop {
            self.cycle().await;
        }
    }

    /// One complete cycle: poll, handle the outcome, advance the poll
    /// window, pause.
    ///
    /// Never returns an error. Every failure is absorbed here so the next
    /// cycle runs no matter what; the pause happens exactly once per cycle
    /// on every path.
    pub async fn cycle(&mut self) {
        let cycle_started = self.clock.now();
        match self.poll_once().await {
            Ok(Some(text)) => {
                info!(%text, "status change delivered");
                self.last_status_text = text;
            }
            Ok(None) => info!("no status change"),
            // Never re-report a delivery failure through the channel that
            // just failed.
            Err(CycleError::Delivery(err)) => error!("notification delivery failed: {err}"),
            Err(err) => {
                error!("poll cycle failed: {err}");
                let report = format!("Сбой в работе программы: {err}");
                if let Err(report_err) = self.notifier.notify(&report).await {
                    error!("failure report did not reach the chat: {report_err}");
                }
            }
        }
        self.last_timestamp = cycle_started;
        self.clock.sleep(self.retry_interval).await;
    }

    /// Returns the text that was delivered, or `None` when there was
    /// nothing new to say.
    async fn poll_once(&self) -> Result<Option<String>, CycleError> {
        let response = self.source.fetch(self.last_timestamp).await?;
        let homeworks = extract_homeworks(&response)?;
        let Some(newest) = homeworks.first() else {
            return Ok(None);
        };
        let text = render_status(newest)?;
        if text == self.last_status_text {
            return Ok(None);
        }
        self.notifier.notify(&text).await?;
        Ok(Some(text))
    }
}
