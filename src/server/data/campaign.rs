//! Repository for campaigns.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Fields of a campaign to insert
pub struct NewCampaign {
    /// Display name
    pub name: String,
    /// Unique URL slug
    pub slug: String,
    /// Free-form description
    pub description: Option<String>,
    /// Id of the game system the campaign is played in
    pub game_system: String,
    /// User running the campaign
    pub gm_user_id: String,
    /// World Anvil world the campaign is set in
    pub world_anvil_world_id: Option<String>,
}

/// Queries and writes for the `campaign` table
pub struct CampaignRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CampaignRepository<'a, C> {
    /// Creates a new instance of [`CampaignRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a campaign with a fresh id and timestamps
    pub async fn create(&self, campaign: NewCampaign) -> Result<entity::campaign::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let campaign = entity::campaign::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(campaign.name),
            slug: ActiveValue::Set(campaign.slug),
            description: ActiveValue::Set(campaign.description),
            game_system: ActiveValue::Set(campaign.game_system),
            gm_user_id: ActiveValue::Set(campaign.gm_user_id),
            world_anvil_world_id: ActiveValue::Set(campaign.world_anvil_world_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        campaign.insert(self.db).await
    }

    /// Gets the campaign holding `slug`
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::campaign::Model>, DbErr> {
        entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Gets the campaigns a user runs as GM
    pub async fn get_by_gm(&self, user_id: &str) -> Result<Vec<entity::campaign::Model>, DbErr> {
        entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::GmUserId.eq(user_id))
            .order_by_asc(entity::campaign::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets the campaigns linked to any of the given parties
    pub async fn get_by_party_ids(
        &self,
        party_ids: &[String],
    ) -> Result<Vec<entity::campaign::Model>, DbErr> {
        if party_ids.is_empty() {
            return Ok(Vec::new());
        }

        let campaign_ids: Vec<String> = entity::prelude::PartyCampaign::find()
            .filter(entity::party_campaign::Column::PartyId.is_in(party_ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.campaign_id)
            .collect();

        if campaign_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::Id.is_in(campaign_ids))
            .order_by_asc(entity::campaign::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Returns true if any campaign holds `slug`
    pub async fn slug_taken(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Campaign::find()
            .filter(entity::campaign::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
