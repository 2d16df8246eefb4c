//! Stashes command - lists current stashes (including silences).

use crate::commands::{CommandHandler, CommandMatch};
use crate::error::AppResult;
use crate::render;
use async_trait::async_trait;
use regex::Regex;
use sensu_client::{SensuClient, Stash};
use std::sync::Arc;
use tracing::warn;

pub struct StashesHandler {
    sensu: Arc<SensuClient>,
}

impl StashesHandler {
    pub fn new(sensu: Arc<SensuClient>) -> Self {
        Self { sensu }
    }
}

#[async_trait]
impl CommandHandler for StashesHandler {
    fn name(&self) -> &str {
        "stashes"
    }

    fn pattern(&self) -> &Regex {
        route!(r"^sensu stash(es)?")
    }

    fn usage(&self) -> (&str, &str) {
        ("sensu stashes", "Displays current sensu stashes")
    }

    async fn execute(&self, _command: &CommandMatch) -> AppResult<String> {
        let response = self.sensu.stashes().await?;

        if response.status() != 200 {
            warn!("Sensu returned {} fetching {}", response.status(), response.url);
            return Ok("An error occurred fetching stashes".into());
        }

        let mut stashes: Vec<Stash> = response.json()?;
        render::sort_stashes(&mut stashes);
        Ok(render::stashes(&stashes)?)
    }
}
