//! Clients command - lists every client.

use crate::commands::{CommandHandler, CommandMatch};
use crate::error::AppResult;
use crate::render;
use async_trait::async_trait;
use regex::Regex;
use sensu_client::{Client, SensuClient};
use std::sync::Arc;
use tracing::warn;

pub struct ClientsHandler {
    sensu: Arc<SensuClient>,
}

impl ClientsHandler {
    pub fn new(sensu: Arc<SensuClient>) -> Self {
        Self { sensu }
    }
}

#[async_trait]
impl CommandHandler for ClientsHandler {
    fn name(&self) -> &str {
        "clients"
    }

    fn pattern(&self) -> &Regex {
        route!(r"^sensu clients")
    }

    fn usage(&self) -> (&str, &str) {
        ("sensu clients", "List sensu clients")
    }

    async fn execute(&self, _command: &CommandMatch) -> AppResult<String> {
        let response = self.sensu.clients().await?;

        if response.status() != 200 {
            warn!("Sensu returned {} fetching {}", response.status(), response.url);
            return Ok("An error occurred fetching clients".into());
        }

        let mut clients: Vec<Client> = response.json()?;
        render::sort_clients(&mut clients);
        Ok(render::clients(&clients)?)
    }
}
