use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use serde_json::json;
use uuid::Uuid;

use crate::{error::TestError, fixtures::fixture_slug};

pub struct CharacterFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a D&D 5e character owned by `user_id`, slugged from its name
    pub async fn insert_character(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<entity::character::Model, TestError> {
        let now = Utc::now().naive_utc();
        let character = entity::character::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(fixture_slug(name)),
            game_system: ActiveValue::Set("dnd5e".to_string()),
            title: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            portrait_url: ActiveValue::Set(None),
            sheet: ActiveValue::Set(json!({})),
            data: ActiveValue::Set(json!({})),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        Ok(character.insert(self.db).await?)
    }
}
