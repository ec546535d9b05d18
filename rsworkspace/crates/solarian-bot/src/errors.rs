//! Error handling for the bot.
//!
//! [`CommandError`] is what a command handler returns when it cannot produce
//! its normal reply. The router turns it into a user-facing reply, so one
//! failing command never takes the bot down. Discord send failures are
//! classified and logged at the matching level by [`log_send_error`].

use std::fmt;

use serenity::http::HttpError;
use solarian_types::{MintError, Reply};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Third-party services the bot calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Giphy,
    Inventory,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Giphy => f.write_str("Giphy"),
            Upstream::Inventory => f.write_str("the Solarians API"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("That is not a valid mint number or mint hash")]
    InvalidMint,

    #[error("Could not find solarian match")]
    MintNotFound,

    #[error("request to {service} failed: {source}")]
    Request {
        service: Upstream,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned HTTP {status}")]
    Status { service: Upstream, status: u16 },

    #[error("could not decode response from {service}: {source}")]
    Decode {
        service: Upstream,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Malformed(#[from] MintError),
}

impl CommandError {
    /// Caused by what the user typed rather than by a failing dependency.
    pub fn is_user_error(&self) -> bool {
        matches!(self, CommandError::InvalidMint | CommandError::MintNotFound)
    }

    /// Reply shown in the channel in place of the command's normal output.
    pub fn user_reply(&self) -> Reply {
        match self {
            CommandError::InvalidMint | CommandError::MintNotFound => {
                Reply::reply(self.to_string())
            }
            CommandError::Request { service, .. }
            | CommandError::Status { service, .. }
            | CommandError::Decode { service, .. } => Reply::reply(format!(
                "Sorry, {} is not answering right now. Try again later.",
                service
            )),
            CommandError::Malformed(_) => {
                Reply::reply("Sorry, the data for that solarian is incomplete.")
            }
        }
    }

    /// Log at debug for user mistakes, error for everything else.
    pub fn log(&self, command: &str) {
        if self.is_user_error() {
            debug!(command = %command, "Rejected: {}", self);
        } else {
            error!(command = %command, "Command failed: {}", self);
        }
    }
}

/// How a failed Discord send should be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// HTTP 429; serenity's ratelimiter normally absorbs these.
    RateLimited,
    /// 4xx other than 429: missing permissions, unknown channel, bad payload.
    Permanent,
    /// Network failures and 5xx.
    Transient,
}

/// Classify a serenity `Error` returned from a send.
pub fn classify(err: &serenity::Error) -> SendOutcome {
    match err {
        serenity::Error::Http(http_err) => classify_http(http_err),
        _ => SendOutcome::Transient,
    }
}

fn classify_http(http_err: &HttpError) -> SendOutcome {
    match http_err {
        HttpError::UnsuccessfulRequest(resp) => classify_status(resp.status_code.as_u16()),
        _ => SendOutcome::Transient,
    }
}

pub fn classify_status(status: u16) -> SendOutcome {
    match status {
        429 => SendOutcome::RateLimited,
        400..=499 => SendOutcome::Permanent,
        _ => SendOutcome::Transient,
    }
}

/// Log a send failure at the appropriate level.
///
/// - Permanent errors → `error!`
/// - Rate-limited and transient → `warn!`
pub fn log_send_error(command: &str, err: &serenity::Error) {
    match classify(err) {
        SendOutcome::Permanent => {
            error!(command = %command, "Failed to send reply (permanent): {}", err);
        }
        SendOutcome::RateLimited => {
            warn!(command = %command, "Failed to send reply (rate limited): {}", err);
        }
        SendOutcome::Transient => {
            warn!(command = %command, "Failed to send reply: {}", err);
        }
    }
}
