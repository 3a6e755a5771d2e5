//! Repository for admin content overrides.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use serde_json::Value;

use crate::model::content::ContentSourceKind;

/// Queries and writes for the `content_override` table
pub struct ContentOverrideRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContentOverrideRepository<'a, C> {
    /// Creates a new instance of [`ContentOverrideRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the overrides for one resource in the order they were created
    pub async fn get_for_resource(
        &self,
        source: ContentSourceKind,
        path: &str,
    ) -> Result<Vec<entity::content_override::Model>, DbErr> {
        entity::prelude::ContentOverride::find()
            .filter(entity::content_override::Column::Source.eq(source.as_str()))
            .filter(entity::content_override::Column::Path.eq(path))
            .order_by_asc(entity::content_override::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the patch stored for a resource, creating the override if there is none
    pub async fn upsert(
        &self,
        source: ContentSourceKind,
        path: &str,
        patch: Value,
    ) -> Result<entity::content_override::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let existing = entity::prelude::ContentOverride::find()
            .filter(entity::content_override::Column::Source.eq(source.as_str()))
            .filter(entity::content_override::Column::Path.eq(path))
            .order_by_asc(entity::content_override::Column::Id)
            .one(self.db)
            .await?;

        match existing {
            Some(existing) => {
                let mut override_am = existing.into_active_model();
                override_am.patch = ActiveValue::Set(patch);
                override_am.updated_at = ActiveValue::Set(now);

                override_am.update(self.db).await
            }
            None => {
                let override_am = entity::content_override::ActiveModel {
                    source: ActiveValue::Set(source.as_str().to_string()),
                    path: ActiveValue::Set(path.to_string()),
                    patch: ActiveValue::Set(patch),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                };

                override_am.insert(self.db).await
            }
        }
    }

    /// Deletes every override for a resource
    pub async fn delete(&self, source: ContentSourceKind, path: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::ContentOverride::delete_many()
            .filter(entity::content_override::Column::Source.eq(source.as_str()))
            .filter(entity::content_override::Column::Path.eq(path))
            .exec(self.db)
            .await
    }
}
