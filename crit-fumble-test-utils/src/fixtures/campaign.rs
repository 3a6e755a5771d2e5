use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use uuid::Uuid;

use crate::{error::TestError, fixtures::fixture_slug};

pub struct CampaignFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a D&D 5e campaign run by `gm_user_id`, optionally linked to a World Anvil world
    pub async fn insert_campaign(
        &self,
        gm_user_id: &str,
        name: &str,
        world_anvil_world_id: Option<&str>,
    ) -> Result<entity::campaign::Model, TestError> {
        let now = Utc::now().naive_utc();
        let campaign = entity::campaign::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(fixture_slug(name)),
            description: ActiveValue::Set(None),
            game_system: ActiveValue::Set("dnd5e".to_string()),
            gm_user_id: ActiveValue::Set(gm_user_id.to_string()),
            world_anvil_world_id: ActiveValue::Set(world_anvil_world_id.map(str::to_string)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        Ok(campaign.insert(self.db).await?)
    }
}
