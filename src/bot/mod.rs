//! Discord bot integration.
//!
//! This module connects the bot to Discord's gateway and adapts Serenity events into
//! the services under `service/`. The client is built during startup and run in a
//! separate tokio task so `main` can wait for a shutdown signal alongside it.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and channel data for the cache
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `GUILD_MEMBERS` - Receive member join events (privileged intent)
//! - `GUILD_PRESENCES` - Receive presence updates (privileged intent)
//!
//! Note: `GUILD_MEMBERS` and `GUILD_PRESENCES` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
