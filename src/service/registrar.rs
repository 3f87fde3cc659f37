//! Guild slash command registration.

use serenity::{
    all::{CommandOptionType, CreateCommand, CreateCommandOption, GuildId},
    async_trait,
    http::Http,
};

use crate::{
    error::AppError,
    model::command::{BotCommand, CommandDefinition},
};

/// Destination for a guild's command set.
#[async_trait]
pub trait CommandSink: Send + Sync {
    /// Replaces every command registered for the guild, returning how many Discord
    /// now holds.
    async fn submit(
        &self,
        guild_id: GuildId,
        commands: Vec<CreateCommand>,
    ) -> Result<usize, serenity::Error>;
}

#[async_trait]
impl CommandSink for Http {
    async fn submit(
        &self,
        guild_id: GuildId,
        commands: Vec<CreateCommand>,
    ) -> Result<usize, serenity::Error> {
        let registered = guild_id.set_commands(self, commands).await?;

        Ok(registered.len())
    }
}

/// Declares the bot's command surface for a single guild.
pub struct CommandRegistrar {
    guild_id: GuildId,
}

impl CommandRegistrar {
    pub fn new(guild_id: GuildId) -> Self {
        Self { guild_id }
    }

    /// Definitions for every command the bot handles, in registration order.
    pub fn definitions() -> Vec<CommandDefinition> {
        BotCommand::ALL
            .iter()
            .map(BotCommand::definition)
            .collect()
    }

    /// Converts the command definitions into Serenity command builders.
    pub fn build_commands() -> Vec<CreateCommand> {
        Self::definitions()
            .into_iter()
            .map(|definition| {
                definition.options.iter().fold(
                    CreateCommand::new(definition.name()).description(definition.description),
                    |command, option| {
                        command.add_option(
                            CreateCommandOption::new(
                                CommandOptionType::String,
                                option.name,
                                option.description,
                            )
                            .required(option.required),
                        )
                    },
                )
            })
            .collect()
    }

    /// Replaces the guild's command set with the bot's commands.
    ///
    /// # Arguments
    /// - `sink` - Where the command set is submitted, normally the Discord HTTP client
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of commands Discord now has registered for the guild
    /// - `Err(AppError::DiscordErr)` - Discord rejected the registration
    pub async fn register(&self, sink: &dyn CommandSink) -> Result<usize, AppError> {
        let count = sink.submit(self.guild_id, Self::build_commands()).await?;

        Ok(count)
    }

    /// Registers the commands, logging the result instead of returning it.
    ///
    /// A failed registration leaves the bot running with whatever commands Discord
    /// already had for the guild. Returns whether the registration succeeded.
    pub async fn register_or_log(&self, sink: &dyn CommandSink) -> bool {
        match self.register(sink).await {
            Ok(count) => {
                tracing::info!(
                    "Successfully registered {} commands for guild {}",
                    count,
                    self.guild_id
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    "Failed to register commands for guild {}: {:?}",
                    self.guild_id,
                    e
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Tests the full command set.
    ///
    /// Expected: seven commands with unique names
    #[test]
    fn defines_seven_unique_commands() {
        let definitions = CommandRegistrar::definitions();
        let names: HashSet<&str> = definitions.iter().map(CommandDefinition::name).collect();

        assert_eq!(definitions.len(), 7);
        assert_eq!(names.len(), 7);
        assert!(names.contains("redditupload"));
        assert!(names.contains("fileshare"));
    }

    /// Tests that builders are produced for every definition.
    ///
    /// Expected: one CreateCommand per definition
    #[test]
    fn builds_one_builder_per_definition() {
        assert_eq!(
            CommandRegistrar::build_commands().len(),
            CommandRegistrar::definitions().len()
        );
    }
}
