//! Scheduled jobs run on `tokio-cron-scheduler`.

pub mod reminder;
