//! Test factory for creating Serenity GuildChannel objects.
//!
//! This module provides factory functions for creating mock Serenity `GuildChannel`
//! structs for testing purposes. These factories create valid channel objects by
//! deserializing JSON, simulating what Discord's API would return.

use serenity::all::GuildChannel;

/// Creates a test Serenity text GuildChannel.
///
/// Creates a GuildChannel object by deserializing JSON with the provided values.
/// The channel is a plain text channel at position 0 with no permission overwrites.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `name` - Channel name
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::channel::create_test_channel;
///
/// let channel = create_test_channel(1310699635287003136, 123456789, "general");
/// assert_eq!(channel.name, "general");
/// ```
pub fn create_test_channel(channel_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": 0,
        "guild_id": guild_id.to_string(),
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "topic": null,
        "nsfw": false,
        "last_message_id": null,
        "rate_limit_per_user": 0,
        "parent_id": null,
        "flags": 0,
        "available_tags": [],
        "applied_tags": [],
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
