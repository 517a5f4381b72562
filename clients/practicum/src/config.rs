use serde::{Deserialize, Serialize};

/// Configuration for PracticumClient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticumClientConfig {
    /// OAuth token for the homework review API
    pub token: String,
    /// Base URL of the homework-statuses endpoint
    pub base_url: String,
}
