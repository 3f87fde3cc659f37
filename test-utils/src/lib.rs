//! Burger Bot Test Utils
//!
//! Shared testing utilities for the bot's unit tests. Provides factories for Serenity
//! model objects that are otherwise only produced by Discord itself.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_channel;
//!
//! #[tokio::test]
//! async fn sends_to_resolved_channel() {
//!     let channel = create_test_channel(1, 2, "general");
//!     // Hand the channel to a fake channel sink...
//! }
//! ```

pub mod serenity;
