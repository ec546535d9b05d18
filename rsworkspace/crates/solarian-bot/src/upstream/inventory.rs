use reqwest::Client;
use solarian_types::Mint;
use tracing::debug;

use super::{get_json, join};
use crate::errors::{CommandError, Upstream};

/// Solarians inventory API client
#[derive(Clone)]
pub struct InventoryClient {
    client: Client,
    base_url: String,
}

impl InventoryClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Every mint, in the order the API lists them. Not cached. A `null`
    /// body or `null` entries carry no record and are dropped.
    pub async fn fetch_mints(&self) -> Result<Vec<Mint>, CommandError> {
        let url = join(&self.base_url, "/api/mints");
        let entries: Option<Vec<Option<Mint>>> =
            get_json(&self.client, Upstream::Inventory, &url, &[]).await?;
        let mints: Vec<Mint> = entries.into_iter().flatten().flatten().collect();
        debug!(count = mints.len(), "Fetched mints");
        Ok(mints)
    }

    /// Animated render of a mint, served by the same host.
    pub fn render_url(&self, mint: &str) -> String {
        join(&self.base_url, &format!("/render/{}.gif", mint))
    }
}
