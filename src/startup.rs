use std::sync::Arc;

use serenity::gateway::ShardManager;
use tracing_subscriber::EnvFilter;

use crate::{error::AppError, service::lifecycle::Lifecycle};

const DEFAULT_LOG_FILTER: &str = "info,serenity=warn";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to info level for the bot and
/// warnings only for Serenity.
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::LoggingErr)` - A global subscriber was already set
pub fn init_logging() -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| AppError::LoggingErr(e.to_string()))
}

/// Orderly shutdown: stop the reminder first, then disconnect every shard.
///
/// # Arguments
/// - `lifecycle` - Lifecycle owning the reminder scheduler
/// - `shard_manager` - Shard manager of the running client
///
/// # Returns
/// - `Ok(())` - Reminder stopped and shards shut down
/// - `Err(AppError::SchedulerErr)` - Reminder scheduler failed to stop; shards are still shut down
pub async fn shutdown(
    lifecycle: &Lifecycle,
    shard_manager: Arc<ShardManager>,
) -> Result<(), AppError> {
    tracing::info!("Shutting down");

    let reminder = lifecycle.shutdown().await;

    shard_manager.shutdown_all().await;

    reminder
}
