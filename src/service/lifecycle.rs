//! Session lifecycle hooks.
//!
//! `Lifecycle` owns the command registrar and the reminder scheduler. When the session
//! first becomes ready it registers the guild commands, then runs the startup
//! announcements. It also posts welcome messages for new members and stops the
//! reminder during shutdown.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::Config,
    error::AppError,
    model::{channel::ChannelRole, message},
    scheduler::reminder::ReminderScheduler,
    service::{
        gateway::{MessagingGateway, SendOutcome},
        registrar::{CommandRegistrar, CommandSink},
    },
};

/// Outcomes of the startup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyOutcome {
    /// Discord accepted the guild command set
    pub registered: bool,
    pub online: SendOutcome,
    pub reminder: SendOutcome,
}

#[derive(Default)]
struct LifecycleState {
    started: bool,
    stopped: bool,
    reminder: Option<ReminderScheduler>,
}

pub struct Lifecycle {
    config: Arc<Config>,
    registrar: CommandRegistrar,
    state: Mutex<LifecycleState>,
}

impl Lifecycle {
    pub fn new(config: Arc<Config>) -> Self {
        let registrar = CommandRegistrar::new(config.discord_guild_id);

        Self {
            config,
            registrar,
            state: Mutex::new(LifecycleState::default()),
        }
    }

    /// Runs the session-ready sequence.
    ///
    /// Registers the guild commands and waits for the result, then sends the online
    /// announcement followed by the subscription reminder to the normal chat channel
    /// and arms the repeating reminder. A failed registration is logged and the
    /// announcements still go out.
    ///
    /// Only the first call does anything; later calls (after a gateway reconnect) and
    /// calls after `shutdown` return `None`. The state lock is not held across Discord
    /// requests, so `shutdown` never waits on a slow startup. If shutdown runs while
    /// the sequence is in flight, the freshly started reminder is stopped again.
    ///
    /// # Arguments
    /// - `commands` - Destination for the guild command set
    /// - `gateway` - Messaging gateway bound to the connected session
    ///
    /// # Returns
    /// - `Some(ReadyOutcome)` - The sequence ran; registration and send outcomes
    /// - `None` - The sequence already ran, or the lifecycle is shut down
    pub async fn on_ready(
        &self,
        commands: &dyn CommandSink,
        gateway: MessagingGateway,
    ) -> Option<ReadyOutcome> {
        {
            let mut state = self.state.lock().await;
            if state.started || state.stopped {
                tracing::debug!("Ready hook already ran or lifecycle stopped, skipping");
                return None;
            }
            state.started = true;
        }

        let registered = self.registrar.register_or_log(commands).await;

        let channel_id = self.config.channels.get(ChannelRole::NormalChat);
        let channel = gateway.resolve(channel_id).await;

        tracing::info!("{}", message::BOT_ONLINE);

        let online = gateway.send(channel.as_ref(), message::BOT_ONLINE).await;
        let reminder = gateway.send(channel.as_ref(), message::SUB_YOUTUBE).await;

        match ReminderScheduler::start(
            gateway,
            channel_id,
            message::SUB_YOUTUBE,
            self.config.reminder_interval,
        )
        .await
        {
            Ok(scheduler) => self.arm(scheduler).await,
            Err(e) => tracing::error!("Failed to start reminder scheduler: {:?}", e),
        }

        Some(ReadyOutcome {
            registered,
            online,
            reminder,
        })
    }

    /// Stores a started reminder, or stops it when shutdown already ran.
    async fn arm(&self, scheduler: ReminderScheduler) {
        let scheduler = {
            let mut state = self.state.lock().await;
            if !state.stopped {
                state.reminder = Some(scheduler);
                return;
            }
            scheduler
        };

        tracing::debug!("Shutdown ran during startup, stopping reminder");
        if let Err(e) = scheduler.stop().await {
            tracing::error!("Failed to stop reminder scheduler: {:?}", e);
        }
    }

    /// Announces a new member in the welcome channel.
    pub async fn on_member_joined(
        &self,
        gateway: &MessagingGateway,
        display_name: &str,
    ) -> SendOutcome {
        let channel_id = self.config.channels.get(ChannelRole::Welcome);

        gateway
            .send_to(channel_id, &message::welcome_message(display_name))
            .await
    }

    /// Stops the reminder if it is running. Safe to call more than once.
    ///
    /// A ready sequence that is still in flight will not leave a reminder armed.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        let reminder = {
            let mut state = self.state.lock().await;
            state.stopped = true;
            state.reminder.take()
        };

        if let Some(reminder) = reminder {
            reminder.stop().await?;
        }

        Ok(())
    }

    /// Whether the repeating reminder is currently armed.
    #[cfg(test)]
    pub async fn reminder_armed(&self) -> bool {
        self.state.lock().await.reminder.is_some()
    }
}
