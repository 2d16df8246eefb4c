//! Sensu client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SensuError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sensu returned {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },
}
