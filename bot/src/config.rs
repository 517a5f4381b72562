//! Process configuration pulled from the environment.

use std::env;

/// The three secrets the bot cannot start without.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the homework review API
    pub practicum_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// Destination chat for every notification
    pub telegram_chat_id: String,
}

/// A required environment variable is missing or blank.
#[derive(Debug, thiserror::Error)]
#[error("required environment variable {0} is missing or empty")]
pub struct ConfigMissing(pub &'static str);

impl Config {
    /// Reads configuration from the process environment, loading a `.env`
    /// file first when one is present. A set-but-blank variable counts as
    /// missing.
    pub fn from_env() -> Result<Self, ConfigMissing> {
        dotenvy::dotenv().ok();
        Ok(Self {
            practicum_token: require("PRACTICUM_TOKEN")?,
            telegram_token: require("TELEGRAM_TOKEN")?,
            telegram_chat_id: require("TELEGRAM_CHAT_ID")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigMissing> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigMissing(name)),
    }
}
