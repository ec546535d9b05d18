use reqwest::Client;
use solarian_types::GiphyRandomResponse;
use tracing::debug;

use super::{get_json, join};
use crate::errors::{CommandError, Upstream};

/// Giphy random-GIF endpoint client
#[derive(Clone)]
pub struct GiphyClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GiphyClient {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// URL of a random GIF for `tag` at content `rating` (`g`, `pg`, ...).
    pub async fn random(&self, tag: &str, rating: &str) -> Result<String, CommandError> {
        let url = join(&self.base_url, "/v1/gifs/random");
        debug!(tag = %tag, rating = %rating, "Requesting random GIF");

        let resp: GiphyRandomResponse = get_json(
            &self.client,
            Upstream::Giphy,
            &url,
            &[
                ("api_key", self.api_key.as_str()),
                ("tag", tag),
                ("rating", rating),
            ],
        )
        .await?;

        Ok(resp.url().to_string())
    }
}
