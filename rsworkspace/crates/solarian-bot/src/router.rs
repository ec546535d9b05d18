//! Prefix command router
//!
//! Turns `!name arg1 arg2` into a call to the registered command `name`
//! (matched case-insensitively) and converts any [`CommandError`] into a
//! reply at this boundary.

#[path = "router_tests.rs"]
mod router_tests;

use std::sync::Arc;

use solarian_types::Reply;
use tracing::debug;

use crate::commands::{Command, CommandInfo, HelpCommand, HELP_INFO};

/// A parsed command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<String>,
}

/// Result of routing one message to a command.
#[derive(Debug)]
pub struct Handled {
    pub command: &'static str,
    pub reply: Reply,
    /// The command hit an upstream or data error (not a user mistake).
    pub failed: bool,
}

pub struct CommandRouter {
    prefix: String,
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRouter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            commands: Vec::new(),
        }
    }

    pub fn register(mut self, command: impl Command + 'static) -> Self {
        self.commands.push(Arc::new(command));
        self
    }

    /// Register `help`, listing everything registered so far plus itself.
    pub fn with_help(self) -> Self {
        let mut infos = self.catalog();
        infos.push(HELP_INFO);
        let help = HelpCommand::new(&self.prefix, &infos);
        self.register(help)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn catalog(&self) -> Vec<CommandInfo> {
        self.commands.iter().map(|c| c.info()).collect()
    }

    /// Split `content` into command name and arguments. `None` unless it
    /// starts with the prefix and names something.
    pub fn parse(&self, content: &str) -> Option<Invocation> {
        let rest = content.trim_start().strip_prefix(self.prefix.as_str())?;
        // `! hello` is not a command
        if rest.starts_with(char::is_whitespace) {
            return None;
        }
        let mut tokens = rest.split_whitespace();
        let name = tokens.next()?.to_string();
        let args = tokens.map(str::to_string).collect();
        Some(Invocation { name, args })
    }

    fn find(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands
            .iter()
            .find(|c| c.info().name.eq_ignore_ascii_case(name))
    }

    /// Route `content` to its command. `None` for anything that is not a
    /// registered command, which the bot ignores silently.
    pub async fn dispatch(&self, content: &str) -> Option<Handled> {
        let invocation = self.parse(content)?;
        let command = self.find(&invocation.name)?;
        let name = command.info().name;

        debug!(command = %name, args = ?invocation.args, "Dispatching command");

        let handled = match command.execute(&invocation.args).await {
            Ok(reply) => Handled {
                command: name,
                reply,
                failed: false,
            },
            Err(e) => {
                e.log(name);
                Handled {
                    command: name,
                    reply: e.user_reply(),
                    failed: !e.is_user_error(),
                }
            }
        };
        Some(handled)
    }
}
