//! First-match command routing.

use crate::commands::{CommandHandler, CommandMatch};
use signal_client::BotMessage;
use tracing::{error, info};

/// Reply sent when a handler fails outright.
pub const FAILURE_REPLY: &str = "Sorry, something went wrong.";

/// Ordered list of handlers; the first whose route matches wins.
pub struct CommandRouter {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl CommandRouter {
    pub fn new(handlers: Vec<Box<dyn CommandHandler>>) -> Self {
        Self { handlers }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Find the handler for a message and extract its arguments.
    pub fn find(&self, message: &BotMessage) -> Option<(&dyn CommandHandler, CommandMatch)> {
        let text = message.text.trim();

        self.handlers.iter().find_map(|handler| {
            handler.pattern().captures(text).map(|captures| {
                let command =
                    CommandMatch::from_captures(handler.name(), &captures, message.user_name());
                (&**handler, command)
            })
        })
    }

    /// Run the matching handler. `None` means the message is not a
    /// command and gets no reply.
    pub async fn respond(&self, message: &BotMessage) -> Option<String> {
        let (handler, command) = self.find(message)?;
        info!("{} invoked {}", command.user, command.command);

        match handler.execute(&command).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                error!("Handler {} failed: {}", handler.name(), e);
                Some(FAILURE_REPLY.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};
    use async_trait::async_trait;
    use regex::Regex;

    struct StubHandler {
        name: &'static str,
        pattern: Regex,
        fail: bool,
    }

    impl StubHandler {
        fn boxed(name: &'static str, pattern: &str) -> Box<dyn CommandHandler> {
            Box::new(Self {
                name,
                pattern: Regex::new(pattern).unwrap(),
                fail: false,
            })
        }
    }

    #[async_trait]
    impl CommandHandler for StubHandler {
        fn name(&self) -> &str {
            self.name
        }

        fn pattern(&self) -> &Regex {
            &self.pattern
        }

        fn usage(&self) -> (&str, &str) {
            (self.name, "stub")
        }

        async fn execute(&self, command: &CommandMatch) -> AppResult<String> {
            if self.fail {
                return Err(AppError::Config(anyhow::anyhow!("boom")));
            }
            Ok(format!("{}:{:?}", self.name, command.groups))
        }
    }

    fn message(text: &str) -> BotMessage {
        BotMessage::direct("+14155551234", "Alice", text)
    }

    #[test]
    fn test_first_match_wins() {
        let router = CommandRouter::new(vec![
            StubHandler::boxed("first", r"^sensu (\w+)"),
            StubHandler::boxed("second", r"^sensu clients"),
        ]);

        let (handler, command) = router.find(&message("sensu clients")).unwrap();
        assert_eq!(handler.name(), "first");
        assert_eq!(command.command, "first");
        assert_eq!(command.arg(0), Some("clients"));
        assert_eq!(command.user, "Alice");
    }

    #[test]
    fn test_text_is_trimmed() {
        let router = CommandRouter::new(vec![StubHandler::boxed("info", r"^sensu info$")]);
        assert!(router.find(&message("  sensu info \n")).is_some());
    }

    #[test]
    fn test_optional_groups_are_none() {
        let router =
            CommandRouter::new(vec![StubHandler::boxed("events", r"^sensu events(?: for (.*))?")]);

        let (_, command) = router.find(&message("sensu events")).unwrap();
        assert_eq!(command.groups, vec![None]);
        assert_eq!(command.arg(0), None);
        assert_eq!(command.arg(5), None);
    }

    #[tokio::test]
    async fn test_unmatched_message_gets_no_reply() {
        let router = CommandRouter::new(vec![StubHandler::boxed("info", r"^sensu info")]);
        assert!(router.respond(&message("good morning")).await.is_none());
    }

    #[tokio::test]
    async fn test_handler_error_becomes_failure_reply() {
        let router = CommandRouter::new(vec![Box::new(StubHandler {
            name: "info",
            pattern: Regex::new(r"^sensu info").unwrap(),
            fail: true,
        }) as Box<dyn CommandHandler>]);

        let reply = router.respond(&message("sensu info")).await;
        assert_eq!(reply.as_deref(), Some(FAILURE_REPLY));
    }
}
