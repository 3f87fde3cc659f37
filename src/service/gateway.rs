//! Messaging gateway for posting text to guild channels.
//!
//! The gateway is the only place the bot sends channel messages. It never returns an
//! error: a channel that cannot be resolved or a message Discord rejects is logged and
//! reported through `SendOutcome` so callers and tests can observe what happened.

use std::sync::Arc;

use serenity::{
    all::{Cache, ChannelId, GuildChannel},
    async_trait,
    http::Http,
};

use crate::model::message::CHANNEL_NOT_FOUND;

/// Result of a single send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Discord accepted the message
    Delivered,
    /// The target channel could not be resolved; nothing was sent
    ChannelNotFound,
    /// Discord rejected the message (permissions, rate limit, network)
    DeliveryFailed,
}

/// Channel resolution and delivery backend.
///
/// Implemented over Serenity's cache and HTTP client in production and by a recording
/// fake in tests.
#[async_trait]
pub trait ChannelSink: Send + Sync {
    /// Resolves a channel ID to a live guild channel.
    async fn resolve(&self, channel_id: ChannelId) -> Option<GuildChannel>;

    /// Posts a text message to the channel.
    async fn deliver(&self, channel: &GuildChannel, content: &str) -> Result<(), serenity::Error>;
}

/// `ChannelSink` backed by the Serenity cache with an HTTP fallback.
pub struct SerenityChannels {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl SerenityChannels {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }
}

#[async_trait]
impl ChannelSink for SerenityChannels {
    /// Looks up the channel in the cache first. Guild channels may not be cached yet
    /// right after connecting, so a miss falls back to a single API request.
    async fn resolve(&self, channel_id: ChannelId) -> Option<GuildChannel> {
        let cached = self
            .cache
            .channel(channel_id)
            .map(|channel| GuildChannel::clone(&channel));
        if cached.is_some() {
            return cached;
        }

        match self.http.get_channel(channel_id).await {
            Ok(channel) => channel.guild(),
            Err(e) => {
                tracing::debug!("Failed to fetch channel {}: {:?}", channel_id, e);
                None
            }
        }
    }

    async fn deliver(&self, channel: &GuildChannel, content: &str) -> Result<(), serenity::Error> {
        channel.id.say(&self.http, content).await?;

        Ok(())
    }
}

/// Thin wrapper that resolves channels and delivers messages, swallowing failures.
#[derive(Clone)]
pub struct MessagingGateway {
    sink: Arc<dyn ChannelSink>,
}

impl MessagingGateway {
    pub fn new(sink: Arc<dyn ChannelSink>) -> Self {
        Self { sink }
    }

    /// Resolves a channel ID, returning `None` when the channel is unknown.
    pub async fn resolve(&self, channel_id: ChannelId) -> Option<GuildChannel> {
        self.sink.resolve(channel_id).await
    }

    /// Sends a message to a possibly absent channel.
    ///
    /// # Arguments
    /// - `channel` - Resolved channel, or `None` if resolution failed
    /// - `content` - Message text
    ///
    /// # Returns
    /// - `SendOutcome::Delivered` - One message was posted
    /// - `SendOutcome::ChannelNotFound` - No channel; logged, nothing sent
    /// - `SendOutcome::DeliveryFailed` - Discord rejected the message; logged with the channel ID
    pub async fn send(&self, channel: Option<&GuildChannel>, content: &str) -> SendOutcome {
        let Some(channel) = channel else {
            tracing::error!("{}", CHANNEL_NOT_FOUND);
            return SendOutcome::ChannelNotFound;
        };

        match self.sink.deliver(channel, content).await {
            Ok(()) => SendOutcome::Delivered,
            Err(e) => {
                tracing::error!("Error sending message to channel ({}): {:?}", channel.id, e);
                SendOutcome::DeliveryFailed
            }
        }
    }

    /// Resolves `channel_id` and sends `content` to it.
    pub async fn send_to(&self, channel_id: ChannelId, content: &str) -> SendOutcome {
        let channel = self.resolve(channel_id).await;
        if channel.is_none() {
            tracing::debug!("Channel {} did not resolve", channel_id);
        }

        self.send(channel.as_ref(), content).await
    }
}
