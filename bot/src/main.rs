//! Homework review bot: polls the review API on a fixed interval and pushes
//! every verdict change to one Telegram chat.
//!
//! Needs `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN` and `TELEGRAM_CHAT_ID` in the
//! environment (a `.env` file is honored). Log verbosity follows `RUST_LOG`.

mod config;

use std::time::Duration;

use clients_practicum::{PracticumClient, PracticumClientConfig, DEFAULT_ENDPOINT};
use clients_telegrambot::TelegramBot;
use homework_watcher::{HomeworkWatcher, SystemClock, WatcherConfig};
use tracing::error;

use crate::config::Config;

/// Hard cap on every HTTP call, so a dead connection cannot stall a poll
/// cycle past the next interval.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let practicum = PracticumClient::new(
        client.clone(),
        PracticumClientConfig {
            token: config.practicum_token,
            base_url: DEFAULT_ENDPOINT.to_string(),
        },
    );
    let telegram = TelegramBot::new(client, config.telegram_token, config.telegram_chat_id);

    let mut watcher = HomeworkWatcher::new(
        WatcherConfig::default(),
        practicum,
        telegram,
        SystemClock,
    );
    watcher.run().await;
    Ok(())
}
