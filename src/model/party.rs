use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PartyDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<String>,
    pub character_ids: Vec<String>,
    pub campaign_ids: Vec<String>,
    pub created_at: NaiveDateTime,
}
