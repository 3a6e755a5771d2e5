use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use serde_json::Value;

use crate::error::TestError;

pub struct ContentFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a merge patch for `path` of the source stored as `source`
    pub async fn insert_override(
        &self,
        source: &str,
        path: &str,
        patch: Value,
    ) -> Result<entity::content_override::Model, TestError> {
        let now = Utc::now().naive_utc();
        let content_override = entity::content_override::ActiveModel {
            source: ActiveValue::Set(source.to_string()),
            path: ActiveValue::Set(path.to_string()),
            patch: ActiveValue::Set(patch),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(content_override.insert(self.db).await?)
    }
}
