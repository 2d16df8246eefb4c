//! Client history command.

use crate::commands::{CommandHandler, CommandMatch};
use crate::domain::add_domain;
use crate::error::AppResult;
use crate::render;
use async_trait::async_trait;
use regex::Regex;
use sensu_client::{HistoryEntry, SensuClient};
use std::sync::Arc;
use tracing::warn;

pub struct ClientHistoryHandler {
    sensu: Arc<SensuClient>,
    domain: Option<String>,
}

impl ClientHistoryHandler {
    pub fn new(sensu: Arc<SensuClient>, domain: Option<String>) -> Self {
        Self { sensu, domain }
    }
}

#[async_trait]
impl CommandHandler for ClientHistoryHandler {
    fn name(&self) -> &str {
        "client_history"
    }

    fn pattern(&self) -> &Regex {
        route!(r"^sensu client ([^\s]*) history")
    }

    fn usage(&self) -> (&str, &str) {
        (
            "sensu client <client> history",
            "Shows history information for a specific client",
        )
    }

    async fn execute(&self, command: &CommandMatch) -> AppResult<String> {
        let client = add_domain(command.arg(0).unwrap_or_default(), self.domain.as_deref());
        let response = self.sensu.client_history(&client).await?;

        if response.status() != 200 {
            warn!("Sensu returned {} fetching {}", response.status(), response.url);
            return Ok(format!("An error occurred fetching client {} history", client));
        }

        let mut history: Vec<HistoryEntry> = response.json()?;
        render::sort_history(&mut history);
        Ok(render::client_history(&history)?)
    }
}
