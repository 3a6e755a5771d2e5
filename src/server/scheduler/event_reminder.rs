//! Cron job posting Discord reminders for upcoming session events.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

use crate::server::{
    data::session_event::SessionEventRepository,
    error::Error,
    scheduler::{config::event_reminder as config, CronJob, JobContext},
    util::time::reminder_window,
};

/// Announces session events that start within the reminder window.
pub struct EventReminderJob;

#[async_trait]
impl CronJob for EventReminderJob {
    fn name(&self) -> &'static str {
        config::NAME
    }

    fn schedule(&self) -> &'static str {
        config::CRON_EXPRESSION
    }

    async fn execute(&self, ctx: &JobContext) -> Result<(), Error> {
        if !ctx.discord.has_bot_token() {
            tracing::info!(job = self.name(), "No Discord bot token configured, skipping");
            return Ok(());
        }

        let event_repo = SessionEventRepository::new(&ctx.db);
        let (from, until) = reminder_window(Utc::now());
        let events = event_repo.get_unannounced_between(from, until).await?;

        let mut announced = 0;
        for event in events {
            let Some(channel_id) = event.channel_id.as_deref() else {
                tracing::warn!(
                    job = self.name(),
                    event_id = %event.id,
                    "Session event has no Discord channel, skipping reminder"
                );
                continue;
            };

            let message = reminder_message(&event);
            if let Err(e) = ctx
                .discord
                .create_message(&ctx.http_client, channel_id, &message)
                .await
            {
                tracing::error!(
                    job = self.name(),
                    event_id = %event.id,
                    "Failed to post session reminder: {}",
                    e
                );
                continue;
            }

            event_repo.mark_notified(&event.id).await?;
            announced += 1;
        }

        tracing::info!(job = self.name(), announced, "Announced upcoming sessions");

        Ok(())
    }
}

/// Discord message with a single embed describing the event
pub fn reminder_message(event: &entity::session_event::Model) -> Value {
    let starts_at = event.start_time.and_utc().timestamp();

    let mut fields = vec![json!({
        "name": "Starts",
        "value": format!("<t:{}:F> (<t:{}:R>)", starts_at, starts_at),
    })];
    if let Some(location) = &event.location {
        fields.push(json!({ "name": "Location", "value": location }));
    }

    json!({
        "embeds": [{
            "title": format!("Upcoming session: {}", event.name),
            "description": event.description.clone().unwrap_or_default(),
            "color": config::EMBED_COLOR,
            "fields": fields,
            "timestamp": event.start_time.and_utc().to_rfc3339(),
        }]
    })
}
