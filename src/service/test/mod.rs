//! Service tests with recording fakes for the Discord-facing traits.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use serenity::{
    all::{ApplicationId, ChannelId, CreateCommand, GuildChannel, GuildId},
    async_trait,
};
use test_utils::serenity::create_test_channel;

use crate::{
    config::Config,
    model::{channel::ChannelDirectory, command::Reply},
    service::{
        dispatcher::InteractionResponder,
        gateway::{ChannelSink, MessagingGateway},
        registrar::CommandSink,
    },
};

mod gateway;

const GUILD_ID: u64 = 900;
const PASSWORD: &str = "burger-secret";

/// Channel sink that knows a fixed set of channels and records every delivery.
#[derive(Default)]
struct RecordingSink {
    channels: HashMap<ChannelId, GuildChannel>,
    fail_delivery: bool,
    resolve_delay: Option<Duration>,
    sent: Mutex<Vec<(ChannelId, String)>>,
}

impl RecordingSink {
    fn with_channels(ids: &[ChannelId]) -> Self {
        let channels = ids
            .iter()
            .map(|id| (*id, create_test_channel(id.get(), GUILD_ID, "channel")))
            .collect();

        Self {
            channels,
            ..Default::default()
        }
    }

    fn failing(mut self) -> Self {
        self.fail_delivery = true;
        self
    }

    /// Makes every channel lookup take `delay`, standing in for a slow HTTP fetch.
    fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay = Some(delay);
        self
    }

    fn sent(&self) -> Vec<(ChannelId, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelSink for RecordingSink {
    async fn resolve(&self, channel_id: ChannelId) -> Option<GuildChannel> {
        if let Some(delay) = self.resolve_delay {
            tokio::time::sleep(delay).await;
        }

        self.channels.get(&channel_id).cloned()
    }

    async fn deliver(&self, channel: &GuildChannel, content: &str) -> Result<(), serenity::Error> {
        if self.fail_delivery {
            return Err(serenity::Error::Other("missing permissions"));
        }

        self.sent
            .lock()
            .unwrap()
            .push((channel.id, content.to_string()));

        Ok(())
    }
}

/// A command set submitted to a `RecordingCommands` sink.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Submission {
    guild_id: GuildId,
    command_count: usize,
    /// Channel messages already delivered when the submission arrived
    sent_before: usize,
}

/// Command sink that records submissions against the channel sink it observes.
struct RecordingCommands {
    channels: Arc<RecordingSink>,
    fail: bool,
    submissions: Mutex<Vec<Submission>>,
}

impl RecordingCommands {
    fn observing(channels: &Arc<RecordingSink>) -> Self {
        Self {
            channels: channels.clone(),
            fail: false,
            submissions: Mutex::new(Vec::new()),
        }
    }

    fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandSink for RecordingCommands {
    async fn submit(
        &self,
        guild_id: GuildId,
        commands: Vec<CreateCommand>,
    ) -> Result<usize, serenity::Error> {
        self.submissions.lock().unwrap().push(Submission {
            guild_id,
            command_count: commands.len(),
            sent_before: self.channels.sent().len(),
        });

        if self.fail {
            return Err(serenity::Error::Other("missing access"));
        }

        Ok(commands.len())
    }
}

/// Responder that records replies, optionally failing the first `fail_count` of them.
#[derive(Default)]
struct RecordingResponder {
    fail_count: usize,
    attempts: Mutex<usize>,
    replies: Mutex<Vec<Reply>>,
}

impl RecordingResponder {
    fn failing(fail_count: usize) -> Self {
        Self {
            fail_count,
            ..Default::default()
        }
    }

    fn replies(&self) -> Vec<Reply> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl InteractionResponder for RecordingResponder {
    async fn reply(&self, reply: Reply) -> Result<(), serenity::Error> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts
        };

        if attempt <= self.fail_count {
            return Err(serenity::Error::Other("unknown interaction"));
        }

        self.replies.lock().unwrap().push(reply);

        Ok(())
    }
}

fn test_channels() -> ChannelDirectory {
    ChannelDirectory {
        normal_chat: ChannelId::new(101),
        rules: ChannelId::new(102),
        reddit_upload: ChannelId::new(103),
        youtube_upload: ChannelId::new(104),
        welcome: ChannelId::new(105),
        file_ticket: ChannelId::new(106),
    }
}

fn test_config(reminder_interval: Duration) -> Arc<Config> {
    Arc::new(Config {
        discord_bot_token: "token".to_string(),
        discord_application_id: ApplicationId::new(1),
        discord_guild_id: GuildId::new(GUILD_ID),
        upload_password: PASSWORD.to_string(),
        channels: test_channels(),
        reminder_interval,
    })
}

/// Builds a gateway over a shared sink so tests can inspect deliveries afterwards.
fn gateway_over(sink: &Arc<RecordingSink>) -> MessagingGateway {
    MessagingGateway::new(sink.clone())
}
