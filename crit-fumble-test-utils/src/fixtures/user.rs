use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use uuid::Uuid;

use crate::error::TestError;

pub struct UserFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert an active, non-admin user for the given Discord ID
    pub async fn insert_user(&self, discord_id: &str) -> Result<entity::user::Model, TestError> {
        self.insert(discord_id, false, false).await
    }

    pub async fn insert_admin(&self, discord_id: &str) -> Result<entity::user::Model, TestError> {
        self.insert(discord_id, true, false).await
    }

    pub async fn insert_deactivated_user(
        &self,
        discord_id: &str,
    ) -> Result<entity::user::Model, TestError> {
        self.insert(discord_id, false, true).await
    }

    async fn insert(
        &self,
        discord_id: &str,
        admin: bool,
        deactivated: bool,
    ) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            discord_id: ActiveValue::Set(discord_id.to_string()),
            name: ActiveValue::Set(Some(format!("User {}", discord_id))),
            slug: ActiveValue::Set(format!("user-{}", discord_id)),
            email: ActiveValue::Set(Some(format!("{}@example.com", discord_id))),
            image: ActiveValue::Set(None),
            admin: ActiveValue::Set(admin),
            world_anvil_id: ActiveValue::Set(None),
            world_anvil_username: ActiveValue::Set(None),
            world_anvil_token: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deactivated_at: ActiveValue::Set(deactivated.then_some(now)),
        };

        Ok(user.insert(self.db).await?)
    }
}
