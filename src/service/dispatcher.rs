//! Slash command dispatcher.
//!
//! Routes each `Invocation` to the handler for its `BotCommand` and replies through an
//! `InteractionResponder`. Handler failures are contained here: they are logged with the
//! command name and converted into an ephemeral error reply.

use std::sync::Arc;

use serenity::{
    all::{
        CommandInteraction, CreateInteractionResponse, CreateInteractionResponseMessage,
    },
    async_trait,
    http::Http,
};

use crate::{
    config::Config,
    error::command::CommandError,
    model::{
        channel::ChannelRole,
        command::{BotCommand, Invocation, Reply, LINK_OPTION, PASSWORD_OPTION},
        message,
    },
    service::gateway::MessagingGateway,
};

/// Sends the reply to an invocation.
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    async fn reply(&self, reply: Reply) -> Result<(), serenity::Error>;
}

/// Responds to a Serenity command interaction.
pub struct CommandResponder<'a> {
    http: &'a Http,
    interaction: &'a CommandInteraction,
}

impl<'a> CommandResponder<'a> {
    pub fn new(http: &'a Http, interaction: &'a CommandInteraction) -> Self {
        Self { http, interaction }
    }
}

#[async_trait]
impl InteractionResponder for CommandResponder<'_> {
    async fn reply(&self, reply: Reply) -> Result<(), serenity::Error> {
        let message = CreateInteractionResponseMessage::new()
            .content(reply.content)
            .ephemeral(reply.ephemeral);

        self.interaction
            .create_response(self.http, CreateInteractionResponse::Message(message))
            .await
    }
}

/// What the dispatcher did with an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The command ran and its reply was sent
    Handled(BotCommand),
    /// The name is not one of the bot's commands; nothing was sent
    Ignored,
    /// The handler failed; an error reply was attempted
    Failed(BotCommand),
}

pub struct CommandDispatcher {
    config: Arc<Config>,
    gateway: MessagingGateway,
}

impl CommandDispatcher {
    pub fn new(config: Arc<Config>, gateway: MessagingGateway) -> Self {
        Self { config, gateway }
    }

    /// Handles a single command invocation.
    ///
    /// Unknown command names are ignored without a reply. Any handler error is logged
    /// with the command name and answered with an ephemeral error message; if that reply
    /// also fails the secondary error is logged and dropped.
    ///
    /// # Arguments
    /// - `invocation` - Command name, option values and invoking user
    /// - `responder` - Channel for the interaction reply
    ///
    /// # Returns
    /// - `DispatchOutcome` describing whether the command was handled, ignored or failed
    pub async fn handle(
        &self,
        invocation: &Invocation,
        responder: &dyn InteractionResponder,
    ) -> DispatchOutcome {
        let Some(command) = BotCommand::from_name(&invocation.command_name) else {
            tracing::debug!("Ignoring unknown command /{}", invocation.command_name);
            return DispatchOutcome::Ignored;
        };

        tracing::debug!("/{} invoked by {}", command.name(), invocation.user_name);

        match self.run(command, invocation, responder).await {
            Ok(()) => DispatchOutcome::Handled(command),
            Err(e) => {
                tracing::error!("Error handling command ({}): {:?}", command.name(), e);

                if let Err(e) = responder.reply(Reply::ephemeral(message::COMMAND_ERROR)).await {
                    tracing::error!(
                        "Failed to send error reply for command ({}): {:?}",
                        command.name(),
                        e
                    );
                }

                DispatchOutcome::Failed(command)
            }
        }
    }

    async fn run(
        &self,
        command: BotCommand,
        invocation: &Invocation,
        responder: &dyn InteractionResponder,
    ) -> Result<(), CommandError> {
        let channels = &self.config.channels;

        let reply = match command {
            BotCommand::Rules => {
                Reply::public(message::rules_message(channels.get(ChannelRole::Rules)))
            }
            BotCommand::RedditUpload => {
                self.upload(command, ChannelRole::RedditUpload, invocation)
                    .await?
            }
            BotCommand::YoutubeUpload => {
                self.upload(command, ChannelRole::YoutubeUpload, invocation)
                    .await?
            }
            BotCommand::Art => Reply::ephemeral(message::ART),
            BotCommand::Help => Reply::ephemeral(message::HELP),
            BotCommand::Hi => Reply::ephemeral(message::HI),
            BotCommand::FileShare => Reply::ephemeral(message::file_share_instructions(
                channels.get(ChannelRole::FileTicket),
            )),
        };

        responder.reply(reply).await?;

        Ok(())
    }

    /// Broadcasts an upload link after checking the shared secret.
    ///
    /// A password mismatch returns the rejection reply before any channel is touched.
    async fn upload(
        &self,
        command: BotCommand,
        target: ChannelRole,
        invocation: &Invocation,
    ) -> Result<Reply, CommandError> {
        let link = invocation
            .option(LINK_OPTION)
            .ok_or(CommandError::MissingOption(LINK_OPTION))?;
        let password = invocation
            .option(PASSWORD_OPTION)
            .ok_or(CommandError::MissingOption(PASSWORD_OPTION))?;

        if password != self.config.upload_password {
            return Ok(Reply::ephemeral(message::INVALID_PASSWORD));
        }

        let channel_id = self.config.channels.get(target);
        let channel = self.gateway.resolve(channel_id).await;
        self.gateway
            .send(channel.as_ref(), &message::upload_announcement(link))
            .await;

        Ok(Reply::ephemeral(message::upload_success(command.name())))
    }
}
