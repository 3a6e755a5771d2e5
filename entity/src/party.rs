use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "party")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub parent_id: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::party_character::Entity")]
    PartyCharacter,
    #[sea_orm(has_many = "super::party_campaign::Entity")]
    PartyCampaign,
}

impl Related<super::party_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyCharacter.def()
    }
}

impl Related<super::party_campaign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyCampaign.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
