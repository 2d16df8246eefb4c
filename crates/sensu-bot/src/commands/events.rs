//! Events command - lists current events, optionally for one client.

use crate::commands::{CommandHandler, CommandMatch};
use crate::domain::add_domain;
use crate::error::AppResult;
use crate::render;
use async_trait::async_trait;
use regex::Regex;
use sensu_client::{Event, SensuClient};
use std::sync::Arc;
use tracing::warn;

pub struct EventsHandler {
    sensu: Arc<SensuClient>,
    domain: Option<String>,
}

impl EventsHandler {
    pub fn new(sensu: Arc<SensuClient>, domain: Option<String>) -> Self {
        Self { sensu, domain }
    }
}

#[async_trait]
impl CommandHandler for EventsHandler {
    fn name(&self) -> &str {
        "events"
    }

    fn pattern(&self) -> &Regex {
        route!(r"^sensu events(?: for (.*))?")
    }

    fn usage(&self) -> (&str, &str) {
        (
            "sensu events [for <client>]",
            "Shows current events, optionally for only a specific client",
        )
    }

    async fn execute(&self, command: &CommandMatch) -> AppResult<String> {
        let client = command
            .arg(0)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(|c| add_domain(c, self.domain.as_deref()));

        let response = self.sensu.events(client.as_deref()).await?;

        if response.status() != 200 {
            warn!("Sensu returned {} fetching {}", response.status(), response.url);
            return Ok("An error occurred fetching events".into());
        }

        let mut events: Vec<Event> = response.json()?;
        render::sort_events(&mut events);
        Ok(render::events(&events)?)
    }
}
