//! Remove client command.

use crate::commands::{CommandHandler, CommandMatch};
use crate::domain::add_domain;
use crate::error::AppResult;
use async_trait::async_trait;
use regex::Regex;
use sensu_client::SensuClient;
use std::sync::Arc;
use tracing::{info, warn};

pub struct RemoveClientHandler {
    sensu: Arc<SensuClient>,
    domain: Option<String>,
}

impl RemoveClientHandler {
    pub fn new(sensu: Arc<SensuClient>, domain: Option<String>) -> Self {
        Self { sensu, domain }
    }
}

#[async_trait]
impl CommandHandler for RemoveClientHandler {
    fn name(&self) -> &str {
        "remove_client"
    }

    fn pattern(&self) -> &Regex {
        route!(r"^(?:sensu\s+)?remove client (.*)")
    }

    fn usage(&self) -> (&str, &str) {
        ("sensu remove client <client>", "Remove client from sensu")
    }

    async fn execute(&self, command: &CommandMatch) -> AppResult<String> {
        let client = add_domain(command.arg(0).unwrap_or_default(), self.domain.as_deref());
        let response = self.sensu.remove_client(&client).await?;

        match response.status() {
            202 => {
                info!("{} removed {}", command.user, client);
                Ok(format!("{} removed", client))
            }
            404 => Ok(format!("{} was not found", client)),
            status => {
                warn!("Sensu returned {} deleting {}", status, response.url);
                Ok(format!("An error occurred removing {}", client))
            }
        }
    }
}
