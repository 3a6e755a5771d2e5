use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use uuid::Uuid;

use crate::{error::TestError, fixtures::fixture_slug};

pub struct PartyFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartyFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_party(&self, name: &str) -> Result<entity::party::Model, TestError> {
        let now = Utc::now().naive_utc();
        let party = entity::party::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(fixture_slug(name)),
            parent_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        Ok(party.insert(self.db).await?)
    }

    pub async fn add_character(
        &self,
        party_id: &str,
        character_id: &str,
    ) -> Result<entity::party_character::Model, TestError> {
        let member = entity::party_character::ActiveModel {
            party_id: ActiveValue::Set(party_id.to_string()),
            character_id: ActiveValue::Set(character_id.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(member.insert(self.db).await?)
    }

    pub async fn add_campaign(
        &self,
        party_id: &str,
        campaign_id: &str,
    ) -> Result<entity::party_campaign::Model, TestError> {
        let link = entity::party_campaign::ActiveModel {
            party_id: ActiveValue::Set(party_id.to_string()),
            campaign_id: ActiveValue::Set(campaign_id.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(link.insert(self.db).await?)
    }
}
