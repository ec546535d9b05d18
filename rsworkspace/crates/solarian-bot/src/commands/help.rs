use serenity::async_trait;
use solarian_types::Reply;

use super::{Command, CommandInfo};
use crate::errors::CommandError;

pub const HELP_INFO: CommandInfo = CommandInfo {
    name: "help",
    description: "Lists the available commands",
    usage: "help",
    example: "help",
};

/// Lists every registered command. Built by the router once registration is
/// complete.
pub struct HelpCommand {
    text: String,
}

impl HelpCommand {
    pub fn new(prefix: &str, infos: &[CommandInfo]) -> Self {
        let mut text = String::from("**Available commands**");
        for info in infos {
            text.push_str(&format!(
                "\n`{p}{}` - {} (example: `{p}{}`)",
                info.usage,
                info.description,
                info.example,
                p = prefix
            ));
        }
        Self { text }
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn info(&self) -> CommandInfo {
        HELP_INFO
    }

    async fn execute(&self, _args: &[String]) -> Result<Reply, CommandError> {
        Ok(Reply::text(self.text.clone()))
    }
}
