//! Resolve command - clears an event for a client/check.

use crate::commands::{CommandHandler, CommandMatch};
use crate::domain::add_domain;
use crate::error::AppResult;
use async_trait::async_trait;
use regex::Regex;
use sensu_client::{ResolveRequest, SensuClient};
use std::sync::Arc;
use tracing::warn;

pub struct ResolveHandler {
    sensu: Arc<SensuClient>,
    domain: Option<String>,
}

impl ResolveHandler {
    pub fn new(sensu: Arc<SensuClient>, domain: Option<String>) -> Self {
        Self { sensu, domain }
    }
}

#[async_trait]
impl CommandHandler for ResolveHandler {
    fn name(&self) -> &str {
        "resolve"
    }

    fn pattern(&self) -> &Regex {
        // The client group is greedy, so the check is whatever follows the last '/'.
        route!(r"^(?:sensu\s+)?resolve event (.*)(?:/)(.*)")
    }

    fn usage(&self) -> (&str, &str) {
        (
            "sensu resolve event <client>[/service]",
            "Resolve event/all events for client",
        )
    }

    async fn execute(&self, command: &CommandMatch) -> AppResult<String> {
        let client = add_domain(command.arg(0).unwrap_or_default(), self.domain.as_deref());
        let check = command.arg(1).unwrap_or_default().to_string();
        let target = format!("{}/{}", client, check);

        let request = ResolveRequest { client, check };
        let response = self.sensu.resolve(&request).await?;

        match response.status() {
            202 => Ok(format!("{} resolved", target)),
            400 => Ok(format!(
                "Resolve message was malformed: {}",
                serde_json::to_string(&request)?
            )),
            404 => Ok(format!("{} was not found", target)),
            status => {
                warn!(
                    "Sensu returned {} resolving {} with {}",
                    status,
                    response.url,
                    serde_json::to_string(&request)?
                );
                Ok(format!("There was an error resolving {}", target))
            }
        }
    }
}
