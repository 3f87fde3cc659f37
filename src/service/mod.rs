//! Bot services.
//!
//! - **Gateway** (`gateway`) - Channel resolution and message delivery
//! - **Dispatcher** (`dispatcher`) - Slash command routing and replies
//! - **Registrar** (`registrar`) - Guild command registration
//! - **Lifecycle** (`lifecycle`) - Ready and member-join hooks, reminder ownership

pub mod dispatcher;
pub mod gateway;
pub mod lifecycle;
pub mod registrar;

#[cfg(test)]
mod test;
