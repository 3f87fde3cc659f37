//! Slash command surface of the bot.
//!
//! `BotCommand` is the closed set of commands the bot registers and dispatches.
//! `CommandDefinition` describes how each command is declared to Discord, and
//! `Invocation` carries the data of a single use of a command.

use std::collections::HashMap;

use serenity::all::{CommandDataOptionValue, CommandInteraction};

/// Name of the link option on the upload commands.
pub const LINK_OPTION: &str = "link";
/// Name of the password option on the upload commands.
pub const PASSWORD_OPTION: &str = "password";

/// Commands known to the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotCommand {
    Rules,
    RedditUpload,
    YoutubeUpload,
    Art,
    Help,
    Hi,
    FileShare,
}

impl BotCommand {
    /// All commands in registration order.
    pub const ALL: [BotCommand; 7] = [
        BotCommand::Rules,
        BotCommand::RedditUpload,
        BotCommand::YoutubeUpload,
        BotCommand::Art,
        BotCommand::Help,
        BotCommand::Hi,
        BotCommand::FileShare,
    ];

    /// Slash command name as registered with Discord.
    pub fn name(&self) -> &'static str {
        match self {
            BotCommand::Rules => "rules",
            BotCommand::RedditUpload => "redditupload",
            BotCommand::YoutubeUpload => "youtubeupload",
            BotCommand::Art => "art",
            BotCommand::Help => "help",
            BotCommand::Hi => "hi",
            BotCommand::FileShare => "fileshare",
        }
    }

    /// Parses a command name, returning `None` for names the bot does not handle.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Declaration of this command for registration with Discord.
    pub fn definition(&self) -> CommandDefinition {
        match self {
            BotCommand::Rules => CommandDefinition::new(*self, "Displays the rules message."),
            BotCommand::RedditUpload => CommandDefinition::new(*self, "Uploads a new Reddit post.")
                .with_option(LINK_OPTION, "Link to the new Reddit post", true)
                .with_option(PASSWORD_OPTION, "Password to authorize the upload", true),
            BotCommand::YoutubeUpload => {
                CommandDefinition::new(*self, "Uploads a new YouTube video.")
                    .with_option(LINK_OPTION, "Link to the new YouTube video", true)
                    .with_option(PASSWORD_OPTION, "Password to authorize the upload", true)
            }
            BotCommand::Art => {
                CommandDefinition::new(*self, "Displays art with a special message.")
            }
            BotCommand::Help => CommandDefinition::new(*self, "Displays this help message."),
            BotCommand::Hi => CommandDefinition::new(*self, "Replies with a friendly greeting."),
            BotCommand::FileShare => CommandDefinition::new(
                *self,
                "Instructs users to create a file share ticket and provides file upload limitations.",
            ),
        }
    }
}

/// A string option declared on a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOptionDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// Declaration of a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub command: BotCommand,
    pub description: &'static str,
    pub options: Vec<CommandOptionDefinition>,
}

impl CommandDefinition {
    fn new(command: BotCommand, description: &'static str) -> Self {
        Self {
            command,
            description,
            options: Vec::new(),
        }
    }

    fn with_option(
        mut self,
        name: &'static str,
        description: &'static str,
        required: bool,
    ) -> Self {
        self.options.push(CommandOptionDefinition {
            name,
            description,
            required,
        });
        self
    }

    pub fn name(&self) -> &'static str {
        self.command.name()
    }
}

/// A single use of a slash command.
///
/// Only string option values are kept; the bot declares no other option types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command_name: String,
    pub options: HashMap<String, String>,
    pub user_name: String,
}

impl Invocation {
    #[cfg(test)]
    pub fn new(command_name: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            command_name: command_name.into(),
            options: HashMap::new(),
            user_name: user_name.into(),
        }
    }

    /// Adds a string option value.
    #[cfg(test)]
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Returns the value of a string option, if supplied.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }
}

impl From<&CommandInteraction> for Invocation {
    fn from(interaction: &CommandInteraction) -> Self {
        let options = interaction
            .data
            .options
            .iter()
            .filter_map(|option| match &option.value {
                CommandDataOptionValue::String(value) => {
                    Some((option.name.clone(), value.clone()))
                }
                _ => None,
            })
            .collect();

        Self {
            command_name: interaction.data.name.clone(),
            options,
            user_name: interaction.user.name.clone(),
        }
    }
}

/// Reply to an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    /// Only the invoking user can see the reply
    pub ephemeral: bool,
}

impl Reply {
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }
}
