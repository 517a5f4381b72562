use reqwest::Client;
use serde::Serialize;
use tracing::debug;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Failure to hand a message over to the Telegram Bot API.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The send call never produced a response (DNS failure, refused
    /// connection, timeout).
    #[error("telegram delivery failed: {0}")]
    Send(#[from] reqwest::Error),
    /// The Bot API answered with a non-success status code.
    #[error("telegram rejected the message with HTTP {0}")]
    Rejected(u16),
}

/// Client for pushing messages to one fixed chat via the Telegram Bot API.
pub struct TelegramBot {
    client: Client,
    token: String,
    chat_id: String,
    api_base: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramBot {
    /// Creates a new `TelegramBot` sending to `chat_id` with the given bot token.
    pub fn new(client: Client, token: String, chat_id: String) -> Self {
        Self {
            client,
            token,
            chat_id,
            api_base: TELEGRAM_API_BASE.to_string(),
        }
    }

    /// Points the client at a different Bot API host.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Sends a text message to the configured chat.
    ///
    /// Exactly one outbound call per invocation; a failed send is always
    /// reported, never swallowed.
    pub async fn push_message(&self, text: &str) -> Result<(), DeliveryError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };
        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected(status.as_u16()));
        }
        debug!("message delivered to telegram chat");
        Ok(())
    }
}
