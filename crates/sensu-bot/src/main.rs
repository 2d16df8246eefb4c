//! Sensu chat bot - main entry point.

use anyhow::Context;
use sensu_bot::chat::{self, ChatSurface};
use sensu_bot::commands::default_handlers;
use sensu_bot::config::{Adapter, Config};
use sensu_bot::error::AppResult;
use sensu_bot::CommandRouter;
use signal_client::{BotMessage, MessageReceiver, SignalClient};
use std::pin::Pin;
use std::sync::Arc;
use tokio_stream::{Stream, StreamExt};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type MessageStream = Pin<Box<dyn Stream<Item = BotMessage>>>;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting Sensu bot...");

    let sensu = Arc::new(config.sensu.client()?);
    let domain = config.sensu.domain().map(String::from);

    info!("Sensu API: {}", sensu.base_url());
    if let Some(domain) = &domain {
        info!("Qualifying client names with domain {}", domain);
    }

    let router = CommandRouter::new(default_handlers(sensu, domain));
    info!("Registered {} command handlers", router.len());

    let (surface, mut stream): (ChatSurface, MessageStream) = match config.bot.adapter {
        Adapter::Signal => {
            let phone_number = config
                .signal
                .phone_number
                .clone()
                .context("SIGNAL__PHONE_NUMBER is required for the signal adapter")?;
            let signal = SignalClient::new(&config.signal.service_url, phone_number)
                .context("Failed to create Signal client")?;

            if !signal.health_check().await {
                error!("Signal API not reachable at {}", config.signal.service_url);
                return Err(anyhow::anyhow!("Signal API not reachable").into());
            }
            info!("Signal API healthy");

            let receiver = MessageReceiver::new(signal.clone(), config.signal.poll_interval);
            let stream: MessageStream = Box::pin(receiver.stream());
            (ChatSurface::Signal(signal), stream)
        }
        Adapter::Shell => {
            info!("Reading commands from stdin as {}", config.bot.shell_user);
            let stream: MessageStream =
                Box::pin(chat::stdin_messages(config.bot.shell_user.clone()));
            (ChatSurface::Shell, stream)
        }
    };

    info!("Listening for messages...");

    // Main message loop
    loop {
        tokio::select! {
            message = stream.next() => {
                let Some(message) = message else {
                    info!("Message stream ended");
                    break;
                };

                if let Some(reply) = router.respond(&message).await {
                    if let Err(e) = surface.reply(&message, &reply).await {
                        error!("Failed to send reply: {}", e);
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
