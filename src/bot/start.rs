use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, config::Config, error::AppError, service::lifecycle::Lifecycle,
};

/// Builds the Discord client with the bot's event handler.
///
/// # Arguments
/// - `config` - Application configuration
/// - `lifecycle` - Lifecycle hooks shared with the shutdown sequence
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(
    config: Arc<Config>,
    lifecycle: Arc<Lifecycle>,
) -> Result<Client, AppError> {
    // GUILD_MEMBERS and GUILD_PRESENCES are privileged intents - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_PRESENCES;

    let token = config.discord_bot_token.clone();
    let application_id = config.discord_application_id;
    let handler = Handler::new(config, lifecycle);

    let client = Client::builder(&token, intents)
        .application_id(application_id)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the Discord client until its shards shut down.
///
/// This should be called from within a tokio::spawn task since it will not return
/// until the bot disconnects for good.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
