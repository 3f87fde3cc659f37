use std::time::Duration;

use serenity::all::ChannelId;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::gateway::MessagingGateway};

/// Repeating job that re-posts a reminder message to a channel.
///
/// Each tick resolves the channel again, so a channel that disappears or comes back
/// while the bot is running is handled by the gateway like any other send. The job
/// runs until `stop` is called.
pub struct ReminderScheduler {
    scheduler: JobScheduler,
}

impl ReminderScheduler {
    /// Starts the reminder job.
    ///
    /// The first repeat fires one `interval` after the call; sending the initial
    /// reminder is left to the caller.
    ///
    /// # Arguments
    /// - `gateway` - Messaging gateway used for every tick
    /// - `channel_id` - Channel receiving the reminder
    /// - `content` - Reminder text
    /// - `interval` - Time between reminders
    ///
    /// # Returns
    /// - `Ok(ReminderScheduler)` - Job added and scheduler running
    /// - `Err(AppError::SchedulerErr)` - Scheduler could not be created or started
    pub async fn start(
        gateway: MessagingGateway,
        channel_id: ChannelId,
        content: &'static str,
        interval: Duration,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new().await?;

        let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
            let gateway = gateway.clone();

            Box::pin(async move {
                gateway.send_to(channel_id, content).await;
            })
        })?;

        scheduler.add(job).await?;
        scheduler.start().await?;

        tracing::info!(
            "Reminder scheduler started for channel {} every {}s",
            channel_id,
            interval.as_secs()
        );

        Ok(Self { scheduler })
    }

    /// Stops the job; no further reminders are sent after this returns.
    pub async fn stop(mut self) -> Result<(), AppError> {
        self.scheduler.shutdown().await?;

        tracing::info!("Reminder scheduler stopped");

        Ok(())
    }
}
