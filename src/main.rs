mod bot;
mod config;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;

use std::sync::Arc;

use crate::{config::Config, error::AppError, service::lifecycle::Lifecycle};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging()?;

    let config = Arc::new(Config::from_env()?);
    let lifecycle = Arc::new(Lifecycle::new(config.clone()));

    let client = bot::start::init_bot(config, lifecycle.clone()).await?;
    let shard_manager = client.shard_manager.clone();

    // Run the Discord client in a separate task so we can wait for Ctrl-C alongside it
    let mut bot_task = tokio::spawn(bot::start::start_bot(client));

    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
        }
        joined = &mut bot_task => {
            match joined {
                Ok(Ok(())) => tracing::warn!("Discord bot stopped"),
                Ok(Err(e)) => tracing::error!("Discord bot error: {}", e),
                Err(e) => tracing::error!("Discord bot task failed: {}", e),
            }
        }
    }

    startup::shutdown(&lifecycle, shard_manager).await
}
