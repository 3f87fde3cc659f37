//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.
//!
//! The lifecycle runs its startup sequence on the first `ready` only:
//! 1. Replace the guild's slash commands
//! 2. Send the announcements and arm the reminder

use serenity::all::{Context, Ready};

use crate::service::{gateway::SendOutcome, lifecycle::Lifecycle};

use super::gateway;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `lifecycle` - Lifecycle hooks owning the registrar and reminder
/// - `ctx` - Discord context for the connected session
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(lifecycle: &Lifecycle, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let Some(outcome) = lifecycle.on_ready(&*ctx.http, gateway(&ctx)).await else {
        return;
    };

    if !outcome.registered
        || outcome.online != SendOutcome::Delivered
        || outcome.reminder != SendOutcome::Delivered
    {
        tracing::warn!(
            "Startup incomplete: registered={}, online={:?}, reminder={:?}",
            outcome.registered,
            outcome.online,
            outcome.reminder
        );
    }
}
