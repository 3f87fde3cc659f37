use std::sync::Arc;

use serenity::all::{Context, EventHandler, Interaction, Member, Ready};
use serenity::async_trait;

use crate::{
    config::Config,
    service::{
        gateway::{MessagingGateway, SerenityChannels},
        lifecycle::Lifecycle,
    },
};

pub mod interaction;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub config: Arc<Config>,
    pub lifecycle: Arc<Lifecycle>,
}

impl Handler {
    pub fn new(config: Arc<Config>, lifecycle: Arc<Lifecycle>) -> Self {
        Self { config, lifecycle }
    }
}

/// Builds a messaging gateway over the session's cache and HTTP client.
fn gateway(ctx: &Context) -> MessagingGateway {
    MessagingGateway::new(Arc::new(SerenityChannels::new(
        ctx.cache.clone(),
        ctx.http.clone(),
    )))
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.lifecycle, ctx, ready).await;
    }

    /// Called when a user invokes a slash command or other interaction
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.config, ctx, interaction).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.lifecycle, ctx, new_member).await;
    }
}
