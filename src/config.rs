use std::time::Duration;

use serenity::all::{ApplicationId, ChannelId, GuildId};

use crate::error::config::ConfigError;
use crate::model::channel::{ChannelDirectory, ChannelRole};

const DEFAULT_REMINDER_INTERVAL_MINUTES: u64 = 30;

/// Process configuration, read once at startup and shared immutably.
pub struct Config {
    pub discord_bot_token: String,
    pub discord_application_id: ApplicationId,
    pub discord_guild_id: GuildId,

    /// Shared secret checked against the `password` option of the upload commands
    pub upload_password: String,

    pub channels: ChannelDirectory,
    pub reminder_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Required: `DISCORD_BOT_TOKEN`, `DISCORD_APPLICATION_ID`, `DISCORD_GUILD_ID`,
    /// `UPLOAD_PASSWORD`. Channel IDs and `REMINDER_INTERVAL_MINUTES` fall back to
    /// built-in defaults when unset.
    ///
    /// # Arguments
    /// - `var` - Returns the value of the named variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - An ID or interval is not a positive integer
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let channel = |role: ChannelRole| -> Result<ChannelId, ConfigError> {
            match var(role.env_var()) {
                Some(value) => parse_id(role.env_var(), &value).map(ChannelId::new),
                None => Ok(ChannelId::new(role.default_channel_id())),
            }
        };

        let reminder_minutes = match var("REMINDER_INTERVAL_MINUTES") {
            Some(value) => parse_id("REMINDER_INTERVAL_MINUTES", &value)?,
            None => DEFAULT_REMINDER_INTERVAL_MINUTES,
        };
        let reminder_secs = reminder_minutes
            .checked_mul(60)
            .ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "REMINDER_INTERVAL_MINUTES".to_string(),
                value: reminder_minutes.to_string(),
            })?;

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_application_id: ApplicationId::new(parse_id(
                "DISCORD_APPLICATION_ID",
                &required("DISCORD_APPLICATION_ID")?,
            )?),
            discord_guild_id: GuildId::new(parse_id(
                "DISCORD_GUILD_ID",
                &required("DISCORD_GUILD_ID")?,
            )?),
            upload_password: required("UPLOAD_PASSWORD")?,
            channels: ChannelDirectory {
                normal_chat: channel(ChannelRole::NormalChat)?,
                rules: channel(ChannelRole::Rules)?,
                reddit_upload: channel(ChannelRole::RedditUpload)?,
                youtube_upload: channel(ChannelRole::YoutubeUpload)?,
                welcome: channel(ChannelRole::Welcome)?,
                file_ticket: channel(ChannelRole::FileTicket)?,
            },
            reminder_interval: Duration::from_secs(reminder_secs),
        })
    }
}

/// Parses a non-zero integer; snowflakes of zero panic in serenity's ID constructors.
fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn required_vars() -> HashMap<String, String> {
        vars(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("DISCORD_APPLICATION_ID", "111"),
            ("DISCORD_GUILD_ID", "222"),
            ("UPLOAD_PASSWORD", "hunter2"),
        ])
    }

    /// Tests loading configuration with only required variables.
    ///
    /// Expected: Ok with default channels and a 30 minute reminder interval
    #[test]
    fn loads_required_and_defaults() -> Result<(), ConfigError> {
        let env = required_vars();
        let config = Config::from_vars(|name| env.get(name).cloned())?;

        assert_eq!(config.discord_bot_token, "token");
        assert_eq!(config.discord_application_id, ApplicationId::new(111));
        assert_eq!(config.discord_guild_id, GuildId::new(222));
        assert_eq!(config.upload_password, "hunter2");
        assert_eq!(config.channels, ChannelDirectory::default());
        assert_eq!(config.reminder_interval, Duration::from_secs(30 * 60));

        Ok(())
    }

    /// Tests overriding channels and the reminder interval.
    ///
    /// Expected: Ok with overridden values and defaults for the rest
    #[test]
    fn applies_overrides() -> Result<(), ConfigError> {
        let mut env = required_vars();
        env.extend(vars(&[
            ("WELCOME_CHANNEL_ID", "999"),
            ("REMINDER_INTERVAL_MINUTES", "5"),
        ]));

        let config = Config::from_vars(|name| env.get(name).cloned())?;

        assert_eq!(config.channels.welcome, ChannelId::new(999));
        assert_eq!(
            config.channels.normal_chat,
            ChannelDirectory::default().normal_chat
        );
        assert_eq!(config.reminder_interval, Duration::from_secs(300));

        Ok(())
    }

    /// Tests a missing required variable.
    ///
    /// Expected: Err(MissingEnvVar) naming the variable
    #[test]
    fn rejects_missing_password() {
        let mut env = required_vars();
        env.remove("UPLOAD_PASSWORD");

        let result = Config::from_vars(|name| env.get(name).cloned());

        assert_eq!(
            result.err(),
            Some(ConfigError::MissingEnvVar("UPLOAD_PASSWORD".to_string()))
        );
    }

    /// Tests non-numeric and zero identifiers, and an interval too large to express
    /// in seconds.
    ///
    /// Expected: Err(InvalidEnvVar) naming the offending variable in each case
    #[test]
    fn rejects_invalid_ids() {
        let mut env = required_vars();
        env.insert("DISCORD_GUILD_ID".to_string(), "my-guild".to_string());
        assert!(matches!(
            Config::from_vars(|name| env.get(name).cloned()),
            Err(ConfigError::InvalidEnvVar { name, .. }) if name == "DISCORD_GUILD_ID"
        ));

        let mut env = required_vars();
        env.insert("RULES_CHANNEL_ID".to_string(), "0".to_string());
        assert!(matches!(
            Config::from_vars(|name| env.get(name).cloned()),
            Err(ConfigError::InvalidEnvVar { name, .. }) if name == "RULES_CHANNEL_ID"
        ));

        let mut env = required_vars();
        env.insert(
            "REMINDER_INTERVAL_MINUTES".to_string(),
            u64::MAX.to_string(),
        );
        assert!(matches!(
            Config::from_vars(|name| env.get(name).cloned()),
            Err(ConfigError::InvalidEnvVar { name, .. }) if name == "REMINDER_INTERVAL_MINUTES"
        ));
    }
}
