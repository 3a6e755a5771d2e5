use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub discord_id: String,
    pub name: Option<String>,
    #[sea_orm(unique)]
    pub slug: String,
    pub email: Option<String>,
    pub image: Option<String>,
    pub admin: bool,
    pub world_anvil_id: Option<String>,
    pub world_anvil_username: Option<String>,
    pub world_anvil_token: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deactivated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character::Entity")]
    Character,
    #[sea_orm(has_many = "super::campaign::Entity")]
    Campaign,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::campaign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
