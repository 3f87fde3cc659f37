use serenity::all::{Context, Member};

use crate::service::lifecycle::Lifecycle;

use super::gateway;

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(lifecycle: &Lifecycle, ctx: Context, new_member: Member) {
    let display_name = new_member.display_name().to_string();

    tracing::info!(
        "User {} joined guild {}",
        new_member.user.id,
        new_member.guild_id
    );

    lifecycle
        .on_member_joined(&gateway(&ctx), &display_name)
        .await;
}
