//! Channel roles and the directory that maps them to Discord channels.
//!
//! Every channel the bot posts to or links in a message is addressed by a logical
//! `ChannelRole`. The `ChannelDirectory` resolves a role to the configured `ChannelId`
//! and is fixed for the lifetime of the process.

use serenity::all::ChannelId;

/// Logical purpose of a channel the bot interacts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelRole {
    /// General chat; receives the online announcement and subscription reminders
    NormalChat,
    /// Channel linked from the `/rules` reply
    Rules,
    /// Receives `/redditupload` broadcasts
    RedditUpload,
    /// Receives `/youtubeupload` broadcasts
    YoutubeUpload,
    /// Receives welcome messages for new members
    Welcome,
    /// Channel linked from the `/fileshare` reply for opening tickets
    FileTicket,
}

impl ChannelRole {
    /// All channel roles in declaration order.
    #[cfg(test)]
    pub const ALL: [ChannelRole; 6] = [
        ChannelRole::NormalChat,
        ChannelRole::Rules,
        ChannelRole::RedditUpload,
        ChannelRole::YoutubeUpload,
        ChannelRole::Welcome,
        ChannelRole::FileTicket,
    ];

    /// Environment variable that overrides the channel for this role.
    pub fn env_var(&self) -> &'static str {
        match self {
            ChannelRole::NormalChat => "NORMAL_CHAT_CHANNEL_ID",
            ChannelRole::Rules => "RULES_CHANNEL_ID",
            ChannelRole::RedditUpload => "REDDIT_UPLOAD_CHANNEL_ID",
            ChannelRole::YoutubeUpload => "YOUTUBE_UPLOAD_CHANNEL_ID",
            ChannelRole::Welcome => "WELCOME_CHANNEL_ID",
            ChannelRole::FileTicket => "FILE_TICKET_CHANNEL_ID",
        }
    }

    /// Channel used when no override is configured.
    pub fn default_channel_id(&self) -> u64 {
        match self {
            ChannelRole::NormalChat => 1310699635287003136,
            ChannelRole::Rules => 1310699635287003136,
            ChannelRole::RedditUpload => 1315079980132339843,
            ChannelRole::YoutubeUpload => 1307706457051103252,
            ChannelRole::Welcome => 1307703760587587604,
            ChannelRole::FileTicket => 1314282618346536990,
        }
    }
}

/// Immutable mapping from channel role to Discord channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDirectory {
    pub normal_chat: ChannelId,
    pub rules: ChannelId,
    pub reddit_upload: ChannelId,
    pub youtube_upload: ChannelId,
    pub welcome: ChannelId,
    pub file_ticket: ChannelId,
}

impl ChannelDirectory {
    /// Looks up the channel configured for a role.
    ///
    /// Pure lookup; the returned ID is not checked against Discord and may fail to
    /// resolve later.
    pub fn get(&self, role: ChannelRole) -> ChannelId {
        match role {
            ChannelRole::NormalChat => self.normal_chat,
            ChannelRole::Rules => self.rules,
            ChannelRole::RedditUpload => self.reddit_upload,
            ChannelRole::YoutubeUpload => self.youtube_upload,
            ChannelRole::Welcome => self.welcome,
            ChannelRole::FileTicket => self.file_ticket,
        }
    }
}

impl Default for ChannelDirectory {
    fn default() -> Self {
        let id = |role: ChannelRole| ChannelId::new(role.default_channel_id());

        Self {
            normal_chat: id(ChannelRole::NormalChat),
            rules: id(ChannelRole::Rules),
            reddit_upload: id(ChannelRole::RedditUpload),
            youtube_upload: id(ChannelRole::YoutubeUpload),
            welcome: id(ChannelRole::Welcome),
            file_ticket: id(ChannelRole::FileTicket),
        }
    }
}
