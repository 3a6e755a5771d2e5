//! Campaign listing and creation.

use sea_orm::DatabaseConnection;

use crate::{
    model::campaign::CreateCampaignDto,
    server::{
        data::campaign::{CampaignRepository, NewCampaign},
        error::Error,
        service::character::{validate_game_system, validate_name},
        util::slug::{slugify, with_suffix},
    },
};

/// Campaign business logic over [`CampaignRepository`](crate::server::data::campaign::CampaignRepository)
pub struct CampaignService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampaignService<'a> {
    /// Creates a new instance of [`CampaignService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Campaigns the user runs as GM
    pub async fn get_gm_campaigns(
        &self,
        user_id: &str,
    ) -> Result<Vec<entity::campaign::Model>, Error> {
        Ok(CampaignRepository::new(self.db).get_by_gm(user_id).await?)
    }

    /// Campaigns linked to any of the parties
    pub async fn get_party_campaigns(
        &self,
        party_ids: &[String],
    ) -> Result<Vec<entity::campaign::Model>, Error> {
        Ok(CampaignRepository::new(self.db)
            .get_by_party_ids(party_ids)
            .await?)
    }

    /// Campaign holding `slug`
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::campaign::Model>, Error> {
        Ok(CampaignRepository::new(self.db).get_by_slug(slug).await?)
    }

    /// Creates a campaign with `user_id` as its GM
    pub async fn create_campaign(
        &self,
        user_id: &str,
        campaign: CreateCampaignDto,
    ) -> Result<entity::campaign::Model, Error> {
        let campaign_repo = CampaignRepository::new(self.db);

        let name = validate_name(campaign.name.as_deref())?;
        let game_system = validate_game_system(campaign.game_system.as_deref())?;

        let base = slugify(&name);
        let mut attempt = 1;
        let slug = loop {
            let slug = with_suffix(&base, attempt);
            if !campaign_repo.slug_taken(&slug).await? {
                break slug;
            }
            attempt += 1;
        };

        let campaign = campaign_repo
            .create(NewCampaign {
                name,
                slug,
                description: campaign.description,
                game_system,
                gm_user_id: user_id.to_string(),
                world_anvil_world_id: campaign
                    .world_anvil_world_id
                    .filter(|world_id| !world_id.trim().is_empty()),
            })
            .await?;

        tracing::debug!(campaign_id = %campaign.id, gm_user_id = user_id, "Created campaign");

        Ok(campaign)
    }
}
