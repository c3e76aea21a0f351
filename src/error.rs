// Error types for riftdex.
// Covers HTTP failures, decoding errors, local dataset IO and configuration.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RiftdexError {
    #[error("HTTP request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("HTTP {status} from {url}")]
    Http { status: StatusCode, url: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RiftdexError>;
