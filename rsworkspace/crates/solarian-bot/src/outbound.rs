//! Outbound delivery: Reply → Discord
//!
//! Converts a platform-neutral [`Reply`] into serenity builders and posts it
//! to the channel the command came from.

#[path = "outbound_tests.rs"]
mod outbound_tests;

use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::http::Http;
use serenity::model::id::{ChannelId, MessageId};
use solarian_types::{Embed, Reply};
use tracing::debug;

/// Serenity embed builder for a reply embed.
pub fn to_create_embed(embed: &Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new().title(&embed.title);
    if let Some(url) = &embed.image_url {
        builder = builder.image(url);
    }
    builder.fields(
        embed
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone(), f.inline)),
    )
}

/// Message builder for `reply`, threaded onto `origin` when the reply asks
/// for it.
pub fn build_message(reply: &Reply, channel: ChannelId, origin: MessageId) -> CreateMessage {
    let mut builder = CreateMessage::new();

    if let Some(content) = &reply.content {
        builder = builder.content(content);
    }

    if let Some(embed) = &reply.embed {
        builder = builder.embed(to_create_embed(embed));
    }

    if reply.reply_to_origin {
        builder = builder.reference_message((channel, origin));
    }

    builder
}

/// Post `reply` to `channel`.
pub async fn deliver(
    http: &Http,
    channel: ChannelId,
    origin: MessageId,
    reply: &Reply,
) -> serenity::Result<()> {
    let builder = build_message(reply, channel, origin);
    let sent = channel.send_message(http, builder).await?;
    debug!(channel = %channel, message = %sent.id, "Reply delivered");
    Ok(())
}
