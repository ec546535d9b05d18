//! Prefix commands understood by the bot

mod hello;
mod help;
mod robot;
mod solarian;

pub use hello::HelloCommand;
pub use help::{HelpCommand, HELP_INFO};
pub use robot::RobotCommand;
pub use solarian::SolarianCommand;

use anyhow::{Context, Result};
use serenity::async_trait;
use solarian_types::{MintPatterns, Reply};

use crate::config::Config;
use crate::errors::CommandError;
use crate::router::CommandRouter;
use crate::upstream::{http_client, GiphyClient, InventoryClient};

/// Registration metadata, shown by `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub example: &'static str,
}

#[async_trait]
pub trait Command: Send + Sync {
    fn info(&self) -> CommandInfo;

    /// Run the command with the whitespace-separated tokens that followed
    /// its name.
    async fn execute(&self, args: &[String]) -> Result<Reply, CommandError>;
}

/// Router with every command registered, wired to the configured upstreams.
pub fn build_router(config: &Config) -> Result<CommandRouter> {
    let http = http_client(config.http_timeout()).context("Failed to build HTTP client")?;
    let patterns = MintPatterns::new().context("Failed to compile mint patterns")?;

    let giphy = GiphyClient::new(
        http.clone(),
        &config.giphy_base_url,
        &config.giphy_api_key,
    );
    let inventory = InventoryClient::new(http, &config.inventory_base_url);

    Ok(CommandRouter::new(&config.prefix)
        .register(HelloCommand)
        .register(RobotCommand::new(giphy))
        .register(SolarianCommand::new(inventory, patterns))
        .with_help())
}
