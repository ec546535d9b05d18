use serenity::async_trait;
use solarian_types::{find_mint, solarian_card, MintPatterns, Reply};
use tracing::debug;

use super::{Command, CommandInfo};
use crate::errors::CommandError;
use crate::upstream::InventoryClient;

/// Looks a Solarian up by mint number or mint hash and renders its card.
pub struct SolarianCommand {
    inventory: InventoryClient,
    patterns: MintPatterns,
}

impl SolarianCommand {
    pub fn new(inventory: InventoryClient, patterns: MintPatterns) -> Self {
        Self {
            inventory,
            patterns,
        }
    }
}

#[async_trait]
impl Command for SolarianCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "solarian",
            description: "get solarian by mint number",
            usage: "solarian <mint number | mint hash>",
            example: "solarian 1",
        }
    }

    async fn execute(&self, args: &[String]) -> Result<Reply, CommandError> {
        let identifier = args.first().map(String::as_str).unwrap_or_default();
        if !self.patterns.is_valid(identifier) {
            return Err(CommandError::InvalidMint);
        }

        let mints = self.inventory.fetch_mints().await?;
        let mint = find_mint(&mints, identifier).ok_or(CommandError::MintNotFound)?;
        debug!(identifier = %identifier, mint = %mint.mint, "Matched solarian");

        let card = solarian_card(mint, self.inventory.render_url(&mint.mint))?;
        Ok(Reply::embed(card))
    }
}
