//! Chat bot that drives a Sensu monitoring API.

pub mod chat;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod router;
pub mod silence;

pub use router::CommandRouter;
