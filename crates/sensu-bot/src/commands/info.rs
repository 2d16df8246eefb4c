//! Info command - dumps the Sensu API's `/info` document.

use crate::commands::{CommandHandler, CommandMatch};
use crate::error::AppResult;
use async_trait::async_trait;
use regex::Regex;
use sensu_client::SensuClient;
use std::sync::Arc;

pub struct InfoHandler {
    sensu: Arc<SensuClient>,
}

impl InfoHandler {
    pub fn new(sensu: Arc<SensuClient>) -> Self {
        Self { sensu }
    }
}

#[async_trait]
impl CommandHandler for InfoHandler {
    fn name(&self) -> &str {
        "info"
    }

    fn pattern(&self) -> &Regex {
        route!(r"^sensu info")
    }

    fn usage(&self) -> (&str, &str) {
        ("sensu info", "Displays sensu information")
    }

    /// Unlike the other commands, a non-200 answer is an error rather than
    /// a friendly reply; the router turns it into the generic failure reply.
    async fn execute(&self, _command: &CommandMatch) -> AppResult<String> {
        let response = self.sensu.info().await?;

        if response.status() != 200 {
            return Err(response.unexpected().into());
        }

        Ok(response.pretty_json()?)
    }
}
