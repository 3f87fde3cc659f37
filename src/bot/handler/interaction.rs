use std::sync::Arc;

use serenity::all::{Context, Interaction};

use crate::{
    config::Config,
    model::command::Invocation,
    service::dispatcher::{CommandDispatcher, CommandResponder},
};

use super::gateway;

/// Handles the interaction_create event.
///
/// Only slash command interactions are dispatched; components, modals and
/// autocomplete requests are ignored.
pub async fn handle_interaction_create(
    config: &Arc<Config>,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let invocation = Invocation::from(&command);
    let dispatcher = CommandDispatcher::new(config.clone(), gateway(&ctx));
    let responder = CommandResponder::new(&ctx.http, &command);

    dispatcher.handle(&invocation, &responder).await;
}
