use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;
use tracing::debug;

use crate::config::PracticumClientConfig;

/// Production endpoint for homework review statuses.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Errors returned by [`PracticumClient::fetch`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request produced no HTTP response at all (DNS failure, refused
    /// connection, timeout).
    #[error("transport failure while polling homework statuses: {0}")]
    Transport(#[source] reqwest::Error),
    /// The endpoint answered with a non-success status code.
    #[error("homework status endpoint returned HTTP {0}")]
    HttpStatus(u16),
    /// The endpoint claimed success but the body was not valid JSON.
    #[error("homework status response is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the homework review status API.
///
/// Issues exactly one GET per [`fetch`](Self::fetch) call; retry scheduling
/// belongs to the caller.
pub struct PracticumClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl PracticumClient {
    pub fn new(client: reqwest::Client, config: PracticumClientConfig) -> Self {
        Self {
            client,
            token: config.token,
            base_url: config.base_url,
        }
    }

    /// Requests homework updates submitted at or after `since` (Unix seconds).
    ///
    /// A zero `since` is replaced with the current wall-clock time; the
    /// upstream contract is "updates from this moment forward". The decoded
    /// body is returned as-is, shape checks are the caller's job.
    pub async fn fetch(&self, since: i64) -> Result<Value, ApiError> {
        let from_date = if since == 0 { unix_now() } else { since };
        debug!(from_date, "requesting homework statuses");
        let response = self
            .client
            .get(&self.base_url)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }
        response.json().await.map_err(ApiError::Decode)
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or_default()
}
