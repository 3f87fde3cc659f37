//! Domain models shared by the services and the event handler.

pub mod channel;
pub mod command;
pub mod message;
