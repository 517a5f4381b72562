mod api;
mod config;

pub use api::{ApiError, PracticumClient, DEFAULT_ENDPOINT};
pub use config::PracticumClientConfig;
