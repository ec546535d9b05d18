//! Serenity event handler implementation

use std::sync::Arc;

use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{debug, info};

use crate::errors::log_send_error;
use crate::health::AppState;
use crate::outbound;
use crate::router::CommandRouter;

/// Routes incoming messages to commands and sends the replies back.
pub struct Handler {
    router: Arc<CommandRouter>,
    health: AppState,
}

impl Handler {
    pub fn new(router: Arc<CommandRouter>, health: AppState) -> Self {
        Self { router, health }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            "Discord bot connected as {}#{:04}",
            ready.user.name,
            ready.user.discriminator.map_or(0, |d| d.get())
        );
        self.health.set_bot_username(ready.user.name.clone()).await;
    }

    async fn message(&self, ctx: Context, msg: Message) {
        // Skip bot messages, including our own replies
        if msg.author.bot {
            return;
        }

        let Some(handled) = self.router.dispatch(&msg.content).await else {
            return;
        };

        debug!(
            command = %handled.command,
            channel = %msg.channel_id,
            author = %msg.author.id,
            failed = handled.failed,
            "Command handled"
        );
        self.health.record(handled.failed);

        if let Err(e) =
            outbound::deliver(&ctx.http, msg.channel_id, msg.id, &handled.reply).await
        {
            log_send_error(handled.command, &e);
        }
    }
}
