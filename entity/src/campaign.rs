use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "campaign")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: Option<String>,
    pub game_system: String,
    pub gm_user_id: String,
    pub world_anvil_world_id: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::GmUserId",
        to = "super::user::Column::Id"
    )]
    GameMaster,
    #[sea_orm(has_many = "super::party_campaign::Entity")]
    PartyCampaign,
    #[sea_orm(has_many = "super::session_event::Entity")]
    SessionEvent,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameMaster.def()
    }
}

impl Related<super::party_campaign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyCampaign.def()
    }
}

impl Related<super::session_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
