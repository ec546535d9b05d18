//! Platform-neutral replies produced by command handlers

use serde::{Deserialize, Serialize};

/// Embed field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }
}

/// Rich message embed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub fields: Vec<EmbedField>,
}

/// What a command sends back to the channel it was invoked from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<Embed>,
    /// Thread the reply onto the invoking message instead of posting it
    /// as a plain channel message.
    #[serde(default)]
    pub reply_to_origin: bool,
}

impl Reply {
    /// Plain channel message.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embed: None,
            reply_to_origin: false,
        }
    }

    /// Text message referencing the invoking message.
    pub fn reply(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            embed: None,
            reply_to_origin: true,
        }
    }

    /// Embed referencing the invoking message.
    pub fn embed(embed: Embed) -> Self {
        Self {
            content: None,
            embed: Some(embed),
            reply_to_origin: true,
        }
    }

    /// Text content, or empty string for embed-only replies.
    pub fn content_str(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}
