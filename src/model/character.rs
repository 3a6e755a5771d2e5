use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub slug: String,
    pub game_system: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub portrait_url: Option<String>,
    #[schema(value_type = Object)]
    pub sheet: Value,
    #[schema(value_type = Object)]
    pub data: Value,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            user_id: character.user_id,
            name: character.name,
            slug: character.slug,
            game_system: character.game_system,
            title: character.title,
            description: character.description,
            portrait_url: character.portrait_url,
            sheet: character.sheet,
            data: character.data,
            created_at: character.created_at,
            updated_at: character.updated_at,
        }
    }
}

/// Body of `POST /api/character`
///
/// `name` is optional here so a missing name is reported as a validation
/// error rather than a deserialization failure.
#[derive(Clone, Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateCharacterDto {
    pub name: Option<String>,
    pub game_system: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub portrait_url: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub sheet: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
}

/// Body of `PUT /api/character/{id}`, absent fields are left unchanged
#[derive(Clone, Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateCharacterDto {
    pub name: Option<String>,
    pub game_system: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub portrait_url: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub sheet: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeletedCharacterDto {
    pub id: String,
}
