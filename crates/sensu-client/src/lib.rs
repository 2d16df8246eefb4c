//! Sensu monitoring API client.

mod auth;
mod client;
mod error;
mod types;

pub use auth::BasicAuth;
pub use client::{ApiResponse, SensuClient};
pub use error::SensuError;
pub use types::*;
