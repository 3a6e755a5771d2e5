//! Props returned by the page controllers, one struct per page.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{
    campaign::CampaignDto, character::CharacterDto, party::PartyDto, user::UserDto,
};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DashboardPageProps {
    pub user: UserDto,
    pub characters: Vec<CharacterDto>,
    pub parties: Vec<PartyDto>,
    pub campaigns: Vec<CampaignDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterPageProps {
    pub user: UserDto,
    pub character: CharacterDto,
    pub parties: Vec<PartyDto>,
    pub campaigns: Vec<CampaignDto>,
    /// World Anvil world of the first linked campaign, `null` when unavailable
    #[schema(value_type = Option<Object>)]
    pub world: Option<Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CompendiumPageProps {
    pub user: UserDto,
    pub characters: Vec<CharacterDto>,
    #[schema(value_type = Object)]
    pub compendium: Value,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WorldPageProps {
    pub user: UserDto,
    pub campaign: CampaignDto,
    #[schema(value_type = Object)]
    pub world: Value,
    #[schema(value_type = Object)]
    pub block_folders: Value,
}
