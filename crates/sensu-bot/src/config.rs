//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use sensu_client::{BasicAuth, SensuClient, SensuError};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Sensu API configuration
    #[serde(default)]
    pub sensu: SensuConfig,

    /// Signal configuration
    #[serde(default)]
    pub signal: SignalConfig,

    /// Bot configuration
    #[serde(default)]
    pub bot: BotConfig,
}

#[derive(Clone, Deserialize)]
pub struct SensuConfig {
    /// Sensu API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Domain appended to bare client names
    #[serde(default)]
    pub domain: Option<String>,

    /// Basic-Auth username; auth is sent only when set
    #[serde(default)]
    pub api_user: Option<String>,

    #[serde(default)]
    pub api_pass: Option<String>,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    /// Signal CLI REST API endpoint
    #[serde(default = "default_signal_service")]
    pub service_url: String,

    /// Bot account number, required by the signal adapter
    #[serde(default)]
    pub phone_number: Option<String>,

    /// Poll interval for messages
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub poll_interval: Duration,
}

/// Where commands come from and replies go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adapter {
    Signal,
    Shell,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_adapter")]
    pub adapter: Adapter,

    /// User name attributed to commands typed into the shell adapter
    #[serde(default = "default_shell_user")]
    pub shell_user: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl SensuConfig {
    /// Configured domain, ignoring an empty value.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref().filter(|d| !d.is_empty())
    }

    pub fn auth(&self) -> Option<BasicAuth> {
        self.api_user
            .as_ref()
            .map(|user| BasicAuth::new(user.clone(), self.api_pass.clone()))
    }

    pub fn client(&self) -> Result<SensuClient, SensuError> {
        SensuClient::new(&self.api_url, self.auth(), self.timeout)
    }
}

impl std::fmt::Debug for SensuConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensuConfig")
            .field("api_url", &self.api_url)
            .field("domain", &self.domain)
            .field("api_user", &self.api_user)
            .field("api_pass", &self.api_pass.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

// Default implementations
impl Default for SensuConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            domain: None,
            api_user: None,
            api_pass: None,
            timeout: default_timeout(),
        }
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            service_url: default_signal_service(),
            phone_number: None,
            poll_interval: default_poll_interval(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            adapter: default_adapter(),
            shell_user: default_shell_user(),
            log_level: default_log_level(),
        }
    }
}

// Default value functions
fn default_api_url() -> String {
    "http://127.0.0.1:4567".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_signal_service() -> String {
    "http://signal-api:8080".into()
}

fn default_poll_interval() -> Duration {
    Duration::from_millis(200)
}

fn default_adapter() -> Adapter {
    Adapter::Signal
}

fn default_shell_user() -> String {
    "Shell User".into()
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Keep phone numbers and passwords as strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
