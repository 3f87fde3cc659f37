//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return, so tests can hand real model types to code that
//! expects them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_channel;
//!
//! let welcome = create_test_channel(1307703760587587604, 123456789, "welcome");
//! ```
//!
//! # Available Factories
//!
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects

pub mod channel;

pub use channel::create_test_channel;
