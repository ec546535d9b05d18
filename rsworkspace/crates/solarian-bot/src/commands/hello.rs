use serenity::async_trait;
use solarian_types::Reply;

use super::{Command, CommandInfo};
use crate::errors::CommandError;

pub struct HelloCommand;

#[async_trait]
impl Command for HelloCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "hello",
            description: "Says hello",
            usage: "hello",
            example: "hello",
        }
    }

    async fn execute(&self, _args: &[String]) -> Result<Reply, CommandError> {
        Ok(Reply::text("Hello there!"))
    }
}
