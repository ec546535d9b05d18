//! Solarian Discord bot
//!
//! Answers `!hello`, `!robot` and `!solarian <mint>` in any channel it can
//! read, backed by Giphy and the Solarians inventory API.

mod commands;
mod config;
mod errors;
mod handlers;
mod health;
mod outbound;
mod router;
mod signal;
mod upstream;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::build_router;
use crate::config::{Config, SystemEnv};
use crate::handlers::Handler;
use crate::health::AppState;

/// Solarian Discord bot CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "BOT_CONFIG", default_value = "config.json")]
    config: String,

    /// Discord bot token (overrides config file)
    #[arg(long, env = "DISCORD_BOT_TOKEN", hide_env_values = true)]
    bot_token: Option<String>,

    /// Giphy API key (overrides config file)
    #[arg(long, env = "GIPHY_API_KEY", hide_env_values = true)]
    giphy_api_key: Option<String>,

    /// Command prefix (overrides config file)
    #[arg(long, env = "BOT_PREFIX")]
    prefix: Option<String>,

    /// Health check server port
    #[arg(long, env = "HEALTH_CHECK_PORT", default_value = "3001")]
    health_port: u16,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(bot_token) = &self.bot_token {
            config.token = bot_token.clone();
        }
        if let Some(giphy_api_key) = &self.giphy_api_key {
            config.giphy_api_key = giphy_api_key.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solarian_bot=debug,solarian_types=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Solarian bot");

    let args = Args::parse();

    let mut config = if std::path::Path::new(&args.config).exists() {
        info!("Loading config from file: {}", args.config);
        Config::from_file(&args.config)?
    } else {
        info!("Config file not found, loading from environment");
        Config::from_env(&SystemEnv)?
    };
    args.apply_overrides(&mut config);

    info!(
        giphy = %config.giphy_base_url,
        inventory = %config.inventory_base_url,
        "Configuration loaded"
    );

    let router = Arc::new(build_router(&config)?);
    info!("Command prefix: {}", router.prefix());
    let health_state = AppState::new();

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.token, intents)
        .event_handler(Handler::new(router, health_state.clone()))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create Discord client: {}", e))?;

    // Start health check server
    let health_port = args.health_port;
    tokio::spawn(async move {
        if let Err(e) = health::start_health_server(health_state, health_port).await {
            error!("Health server error: {}", e);
        }
    });

    // Graceful shutdown: close all shards on SIGTERM or Ctrl+C.
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        signal::stop_shards_on(signal::wait_for_stop(), &*shard_manager).await;
    });

    info!("Starting Discord gateway connection...");

    // Blocks until all shards are stopped
    client
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Discord client error: {}", e))?;

    info!("Solarian bot stopped");
    Ok(())
}
