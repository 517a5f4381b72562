//! Homework review watcher.
//!
//! Polls the review API on a fixed interval and pushes a Telegram message
//! whenever the verdict on the newest submission changes. The loop itself
//! lives in [`HomeworkWatcher`]; the API and Telegram clients plug into it
//! through the [`StatusSource`] and [`Notifier`] seams so the cycle logic
//! can be driven in tests without touching the network.

pub mod config;

mod catalog;
mod clock;
mod types;
mod watcher;

pub use catalog::{render_status, verdict, UnknownStatusError, HOMEWORK_VERDICTS};
pub use clock::{Clock, SystemClock};
pub use config::{WatcherConfig, RETRY_INTERVAL};
pub use types::{extract_homeworks, HomeworkRecord, ValidationError};
pub use watcher::{CycleError, HomeworkWatcher, Notifier, StatusSource};

pub use clients_practicum::ApiError;
pub use clients_telegrambot::DeliveryError;
