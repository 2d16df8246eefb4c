//! Silence command - stashes a timed silence for a client or check.

use crate::commands::{CommandHandler, CommandMatch};
use crate::domain::add_domain;
use crate::error::AppResult;
use crate::silence::{silence_path, stash_path, SilenceDuration};
use async_trait::async_trait;
use regex::Regex;
use sensu_client::{SensuClient, StashContent, StashRequest};
use std::sync::Arc;
use tracing::{info, warn};

/// `source` recorded in the stash content.
const STASH_SOURCE: &str = "lita";

pub struct SilenceHandler {
    sensu: Arc<SensuClient>,
    domain: Option<String>,
}

impl SilenceHandler {
    pub fn new(sensu: Arc<SensuClient>, domain: Option<String>) -> Self {
        Self { sensu, domain }
    }
}

#[async_trait]
impl CommandHandler for SilenceHandler {
    fn name(&self) -> &str {
        "silence"
    }

    fn pattern(&self) -> &Regex {
        route!(r"^(?:sensu\s+)?silence ([^\s/]*)(?:/)?([^\s]*)?(?: for (\d+)(\w))?(?: because (.*))?")
    }

    fn usage(&self) -> (&str, &str) {
        (
            "sensu silence <hostname>[/<check>][ for <duration><units>]",
            "Silence event",
        )
    }

    async fn execute(&self, command: &CommandMatch) -> AppResult<String> {
        let client = add_domain(command.arg(0).unwrap_or_default(), self.domain.as_deref());
        let path = silence_path(&client, command.arg(1));

        // Reject bad durations before touching the API.
        let duration = match SilenceDuration::parse(command.arg(2), command.arg(3)) {
            Ok(duration) => duration,
            Err(e) => return Ok(e.to_string()),
        };

        let reason = command
            .arg(4)
            .filter(|r| !r.trim().is_empty())
            .map(String::from)
            .unwrap_or_else(|| format!("silenced by {}", command.user));

        let request = StashRequest {
            content: StashContent {
                username: command.user.clone(),
                reason,
                source: STASH_SOURCE.into(),
                timestamp: chrono::Utc::now().timestamp(),
            },
            expire: duration.expire_seconds,
            path: stash_path(&path),
        };

        let response = self.sensu.create_stash(&request).await?;

        if response.status() == 201 {
            info!("{} silenced {} for {}", command.user, path, duration.human);
            return Ok(format!("{} silenced for {}", path, duration.human));
        }

        warn!(
            "Sensu returned {} posting '{}' to {}",
            response.status(),
            serde_json::to_string(&request)?,
            response.url
        );
        Ok(format!("An error occurred posting to {}", path))
    }
}
