//! Help command - lists every command's syntax.

use crate::commands::{CommandHandler, CommandMatch};
use crate::error::AppResult;
use async_trait::async_trait;
use regex::Regex;

pub struct HelpHandler {
    usages: Vec<(String, String)>,
}

impl HelpHandler {
    pub const SYNTAX: &'static str = "sensu help";
    pub const DESCRIPTION: &'static str = "Show this message";

    pub fn new(usages: Vec<(String, String)>) -> Self {
        Self { usages }
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    fn name(&self) -> &str {
        "help"
    }

    fn pattern(&self) -> &Regex {
        route!(r"^sensu help")
    }

    fn usage(&self) -> (&str, &str) {
        (Self::SYNTAX, Self::DESCRIPTION)
    }

    async fn execute(&self, _command: &CommandMatch) -> AppResult<String> {
        let lines: Vec<String> = self
            .usages
            .iter()
            .map(|(syntax, description)| format!("{} - {}", syntax, description))
            .collect();

        Ok(lines.join("\n"))
    }
}
