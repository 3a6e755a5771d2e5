//! Names and schedules of the bot's cron jobs.

/// Session event reminder job
pub mod event_reminder {
    /// Name the Discord bot knows the reminder job by
    pub const NAME: &str = "HandleScheduledEvents";

    /// Cron expression for session reminders
    /// Runs every 30 minutes on the hour and half hour (00:00, 00:30, 01:00, etc.)
    pub const CRON_EXPRESSION: &str = "0 */30 * * * *";

    /// Colour of the reminder embed's side bar
    pub const EMBED_COLOR: u32 = 0x5865F2;
}
