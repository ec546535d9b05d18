//! HTTP clients for the third-party APIs the commands call

mod giphy;
mod inventory;

pub use giphy::GiphyClient;
pub use inventory::InventoryClient;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::errors::{CommandError, Upstream};

/// Shared HTTP client with the configured request timeout.
pub fn http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("solarian-bot/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// GET `url` and decode the body as JSON.
///
/// The body is read in full before decoding so it can be traced when the
/// upstream changes shape.
async fn get_json<T: DeserializeOwned>(
    client: &Client,
    service: Upstream,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, CommandError> {
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|source| CommandError::Request { service, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CommandError::Status {
            service,
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| CommandError::Request { service, source })?;
    trace!(service = %service, bytes = body.len(), "Upstream response: {}", body);

    serde_json::from_str(&body).map_err(|source| CommandError::Decode { service, source })
}

fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
