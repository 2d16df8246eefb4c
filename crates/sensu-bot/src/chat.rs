//! Chat surfaces the bot can run on.

use crate::error::AppResult;
use signal_client::{BotMessage, SignalClient};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_stream::Stream;
use tracing::error;

/// Source id given to messages typed into the shell adapter.
pub const SHELL_SOURCE: &str = "shell";

/// Where replies are delivered.
pub enum ChatSurface {
    Signal(SignalClient),
    /// Replies are printed to stdout.
    Shell,
}

impl ChatSurface {
    pub async fn reply(&self, message: &BotMessage, text: &str) -> AppResult<()> {
        match self {
            ChatSurface::Signal(signal) => signal.reply(message, text).await?,
            ChatSurface::Shell => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(text.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }
        Ok(())
    }
}

/// One message per non-blank stdin line, attributed to `user`.
/// Ends when stdin closes.
pub fn stdin_messages(user: String) -> impl Stream<Item = BotMessage> {
    async_stream::stream! {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    yield BotMessage::direct(SHELL_SOURCE, user.clone(), line);
                }
                Ok(None) => break,
                Err(e) => {
                    error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    }
}
