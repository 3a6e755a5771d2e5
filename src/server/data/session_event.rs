//! Repository for scheduled session events.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    UpdateResult,
};

/// Queries and writes for the `session_event` table
pub struct SessionEventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionEventRepository<'a, C> {
    /// Creates a new instance of [`SessionEventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets events starting in `[from, until)` that have not been announced yet
    pub async fn get_unannounced_between(
        &self,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> Result<Vec<entity::session_event::Model>, DbErr> {
        entity::prelude::SessionEvent::find()
            .filter(entity::session_event::Column::NotificationSent.eq(false))
            .filter(entity::session_event::Column::StartTime.gte(from))
            .filter(entity::session_event::Column::StartTime.lt(until))
            .order_by_asc(entity::session_event::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Flags an event as announced so later runs skip it
    pub async fn mark_notified(&self, event_id: &str) -> Result<UpdateResult, DbErr> {
        entity::prelude::SessionEvent::update_many()
            .set(entity::session_event::ActiveModel {
                notification_sent: ActiveValue::Set(true),
                ..Default::default()
            })
            .filter(entity::session_event::Column::Id.eq(event_id))
            .exec(self.db)
            .await
    }
}
