use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CampaignDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub game_system: String,
    pub gm_user_id: String,
    pub world_anvil_world_id: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::campaign::Model> for CampaignDto {
    fn from(campaign: entity::campaign::Model) -> Self {
        Self {
            id: campaign.id,
            name: campaign.name,
            slug: campaign.slug,
            description: campaign.description,
            game_system: campaign.game_system,
            gm_user_id: campaign.gm_user_id,
            world_anvil_world_id: campaign.world_anvil_world_id,
            created_at: campaign.created_at,
        }
    }
}

/// Body of `POST /api/campaign`
#[derive(Clone, Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateCampaignDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub game_system: Option<String>,
    pub world_anvil_world_id: Option<String>,
}
