use thiserror::Error;

/// Failures raised while handling a single slash command.
///
/// These never escape the dispatcher. They are logged with the command name and
/// turned into a generic ephemeral error reply for the invoking user.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A required command option was not supplied.
    ///
    /// Discord enforces required options on its side, so this only occurs when the
    /// registered command set is stale.
    #[error("Missing required option: {0}")]
    MissingOption(&'static str),

    /// Responding to the interaction failed.
    ///
    /// Boxed due to the size of `serenity::Error`.
    #[error("Failed to reply to interaction: {0}")]
    Reply(#[source] Box<serenity::Error>),
}

impl From<serenity::Error> for CommandError {
    fn from(err: serenity::Error) -> Self {
        CommandError::Reply(Box::new(err))
    }
}
