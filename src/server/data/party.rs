//! Repository for parties and their character and campaign memberships.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

/// Queries and writes for parties and their membership tables
pub struct PartyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PartyRepository<'a, C> {
    /// Creates a new instance of [`PartyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a party, optionally nested under `parent_id`
    pub async fn create(
        &self,
        name: String,
        slug: String,
        parent_id: Option<String>,
    ) -> Result<entity::party::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let party = entity::party::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(name),
            slug: ActiveValue::Set(slug),
            parent_id: ActiveValue::Set(parent_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        party.insert(self.db).await
    }

    /// Adds a character to a party
    pub async fn add_character(
        &self,
        party_id: &str,
        character_id: &str,
    ) -> Result<entity::party_character::Model, DbErr> {
        let member = entity::party_character::ActiveModel {
            party_id: ActiveValue::Set(party_id.to_string()),
            character_id: ActiveValue::Set(character_id.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        member.insert(self.db).await
    }

    /// Links a party to a campaign it plays in
    pub async fn add_campaign(
        &self,
        party_id: &str,
        campaign_id: &str,
    ) -> Result<entity::party_campaign::Model, DbErr> {
        let link = entity::party_campaign::ActiveModel {
            party_id: ActiveValue::Set(party_id.to_string()),
            campaign_id: ActiveValue::Set(campaign_id.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        link.insert(self.db).await
    }

    /// Gets every party that contains at least one of `character_ids`
    pub async fn get_by_character_ids(
        &self,
        character_ids: &[String],
    ) -> Result<Vec<entity::party::Model>, DbErr> {
        if character_ids.is_empty() {
            return Ok(Vec::new());
        }

        let party_ids: Vec<String> = entity::prelude::PartyCharacter::find()
            .filter(entity::party_character::Column::CharacterId.is_in(character_ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|member| member.party_id)
            .collect();

        self.get_many(party_ids).await
    }

    /// Gets parties by id, ordered by name
    pub async fn get_many(&self, party_ids: Vec<String>) -> Result<Vec<entity::party::Model>, DbErr> {
        if party_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Party::find()
            .filter(entity::party::Column::Id.is_in(party_ids))
            .order_by_asc(entity::party::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets the character memberships of the given parties
    pub async fn get_characters(
        &self,
        party_ids: &[String],
    ) -> Result<Vec<entity::party_character::Model>, DbErr> {
        entity::prelude::PartyCharacter::find()
            .filter(entity::party_character::Column::PartyId.is_in(party_ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Gets the campaign links of the given parties
    pub async fn get_campaigns(
        &self,
        party_ids: &[String],
    ) -> Result<Vec<entity::party_campaign::Model>, DbErr> {
        entity::prelude::PartyCampaign::find()
            .filter(entity::party_campaign::Column::PartyId.is_in(party_ids.to_vec()))
            .all(self.db)
            .await
    }
}
