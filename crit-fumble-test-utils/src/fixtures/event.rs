use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use uuid::Uuid;

use crate::error::TestError;

pub struct EventFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a session event without a campaign
    pub async fn insert_event(
        &self,
        channel_id: Option<&str>,
        start_time: NaiveDateTime,
        notification_sent: bool,
    ) -> Result<entity::session_event::Model, TestError> {
        let event = entity::session_event::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            campaign_id: ActiveValue::Set(None),
            name: ActiveValue::Set("Session 12".to_string()),
            description: ActiveValue::Set(Some("The heroes return to Emon".to_string())),
            location: ActiveValue::Set(Some("Voice channel".to_string())),
            channel_id: ActiveValue::Set(channel_id.map(str::to_string)),
            start_time: ActiveValue::Set(start_time),
            notification_sent: ActiveValue::Set(notification_sent),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(event.insert(self.db).await?)
    }
}
