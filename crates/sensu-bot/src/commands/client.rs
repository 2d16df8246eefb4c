//! Client command - shows one client's raw record.

use crate::commands::{CommandHandler, CommandMatch};
use crate::domain::add_domain;
use crate::error::AppResult;
use async_trait::async_trait;
use regex::Regex;
use sensu_client::SensuClient;
use std::sync::Arc;
use tracing::warn;

pub struct ClientHandler {
    sensu: Arc<SensuClient>,
    domain: Option<String>,
}

impl ClientHandler {
    pub fn new(sensu: Arc<SensuClient>, domain: Option<String>) -> Self {
        Self { sensu, domain }
    }
}

#[async_trait]
impl CommandHandler for ClientHandler {
    fn name(&self) -> &str {
        "client"
    }

    fn pattern(&self) -> &Regex {
        route!(r"^sensu client ([^\s]*$)")
    }

    fn usage(&self) -> (&str, &str) {
        (
            "sensu client <client>",
            "Shows information on a specific client",
        )
    }

    async fn execute(&self, command: &CommandMatch) -> AppResult<String> {
        let client = add_domain(command.arg(0).unwrap_or_default(), self.domain.as_deref());
        let response = self.sensu.client(&client).await?;

        match response.status() {
            200 => Ok(response.pretty_json()?),
            404 => Ok(format!("{} was not found", client)),
            status => {
                warn!("Sensu returned {} fetching {}", status, response.url);
                Ok(format!("An error occurred fetching client {}", client))
            }
        }
    }
}
