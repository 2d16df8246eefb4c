//! Bot command handlers.
//!
//! Each handler owns one regex route. Capture groups become the
//! positional arguments of a [`CommandMatch`].

/// Compile a route pattern once.
macro_rules! route {
    ($pattern:expr) => {{
        static PATTERN: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
            regex::Regex::new($pattern).unwrap_or_else(|_| unreachable!())
        });
        &*PATTERN
    }};
}

mod client;
mod client_history;
mod clients;
mod events;
mod help;
mod info;
mod remove_client;
mod resolve;
mod silence;
mod stashes;

pub use client::ClientHandler;
pub use client_history::ClientHistoryHandler;
pub use clients::ClientsHandler;
pub use events::EventsHandler;
pub use help::HelpHandler;
pub use info::InfoHandler;
pub use remove_client::RemoveClientHandler;
pub use resolve::ResolveHandler;
pub use silence::SilenceHandler;
pub use stashes::StashesHandler;

use crate::error::AppResult;
use async_trait::async_trait;
use regex::{Captures, Regex};
use sensu_client::SensuClient;
use std::sync::Arc;

/// A routed command: handler name, capture groups and who sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMatch {
    pub command: String,
    pub groups: Vec<Option<String>>,
    pub user: String,
}

impl CommandMatch {
    pub fn from_captures(command: &str, captures: &Captures<'_>, user: &str) -> Self {
        Self {
            command: command.to_string(),
            groups: captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect(),
            user: user.to_string(),
        }
    }

    /// Capture group `index` (0 is the first group), if it participated.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.groups.get(index).and_then(|g| g.as_deref())
    }
}

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name (e.g., "silence").
    fn name(&self) -> &str;

    /// Route matched against the trimmed message text.
    fn pattern(&self) -> &Regex;

    /// Help entry: syntax and description.
    fn usage(&self) -> (&str, &str);

    /// Execute the command.
    async fn execute(&self, command: &CommandMatch) -> AppResult<String>;
}

/// All command handlers in route order, with help last.
pub fn default_handlers(
    sensu: Arc<SensuClient>,
    domain: Option<String>,
) -> Vec<Box<dyn CommandHandler>> {
    let mut handlers: Vec<Box<dyn CommandHandler>> = vec![
        Box::new(ClientHandler::new(sensu.clone(), domain.clone())),
        Box::new(ClientHistoryHandler::new(sensu.clone(), domain.clone())),
        Box::new(ClientsHandler::new(sensu.clone())),
        Box::new(EventsHandler::new(sensu.clone(), domain.clone())),
        Box::new(InfoHandler::new(sensu.clone())),
        Box::new(RemoveClientHandler::new(sensu.clone(), domain.clone())),
        Box::new(ResolveHandler::new(sensu.clone(), domain.clone())),
        Box::new(SilenceHandler::new(sensu.clone(), domain)),
        Box::new(StashesHandler::new(sensu)),
    ];

    let mut usages: Vec<(String, String)> = handlers
        .iter()
        .map(|h| {
            let (syntax, description) = h.usage();
            (syntax.to_string(), description.to_string())
        })
        .collect();
    usages.push((HelpHandler::SYNTAX.into(), HelpHandler::DESCRIPTION.into()));

    handlers.push(Box::new(HelpHandler::new(usages)));
    handlers
}
