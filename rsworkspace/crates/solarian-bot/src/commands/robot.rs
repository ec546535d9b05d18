use serenity::async_trait;
use solarian_types::Reply;

use super::{Command, CommandInfo};
use crate::errors::CommandError;
use crate::upstream::GiphyClient;

const TAG: &str = "robot";
const RATING: &str = "g";

/// Replies with a random robot GIF.
pub struct RobotCommand {
    giphy: GiphyClient,
}

impl RobotCommand {
    pub fn new(giphy: GiphyClient) -> Self {
        Self { giphy }
    }
}

#[async_trait]
impl Command for RobotCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "robot",
            description: "Random robot gif",
            usage: "robot",
            example: "robot",
        }
    }

    async fn execute(&self, _args: &[String]) -> Result<Reply, CommandError> {
        let url = self.giphy.random(TAG, RATING).await?;
        Ok(Reply::text(url))
    }
}
