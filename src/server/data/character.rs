//! Repository for player characters.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde_json::Value;
use uuid::Uuid;

/// Fields of a character to insert
pub struct NewCharacter {
    /// Owning user
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Unique URL slug
    pub slug: String,
    /// Id of the game system the sheet belongs to
    pub game_system: String,
    /// Epithet shown under the name
    pub title: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Portrait image URL
    pub portrait_url: Option<String>,
    /// System-specific character sheet
    pub sheet: Value,
    /// Arbitrary extra data kept with the character
    pub data: Value,
}

/// Character edits, `None` leaves a field unchanged
#[derive(Default)]
pub struct CharacterChanges {
    /// New display name
    pub name: Option<String>,
    /// New slug, already checked for uniqueness
    pub slug: Option<String>,
    /// New game system id
    pub game_system: Option<String>,
    /// New epithet
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New portrait URL
    pub portrait_url: Option<String>,
    /// Replacement sheet
    pub sheet: Option<Value>,
    /// Replacement extra data
    pub data: Option<Value>,
}

/// Queries and writes for the `character` table
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a character with a fresh id and timestamps
    pub async fn create(&self, character: NewCharacter) -> Result<entity::character::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let character = entity::character::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(character.user_id),
            name: ActiveValue::Set(character.name),
            slug: ActiveValue::Set(character.slug),
            game_system: ActiveValue::Set(character.game_system),
            title: ActiveValue::Set(character.title),
            description: ActiveValue::Set(character.description),
            portrait_url: ActiveValue::Set(character.portrait_url),
            sheet: ActiveValue::Set(character.sheet),
            data: ActiveValue::Set(character.data),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        character.insert(self.db).await
    }

    /// Gets a character by id
    pub async fn get(&self, character_id: &str) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Gets the character holding `slug`
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Gets a user's characters, newest first
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id))
            .order_by_desc(entity::character::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Returns true if any character other than `except_character_id` holds `slug`
    pub async fn slug_taken(
        &self,
        slug: &str,
        except_character_id: Option<&str>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Character::find()
            .filter(entity::character::Column::Slug.eq(slug));

        if let Some(character_id) = except_character_id {
            query = query.filter(entity::character::Column::Id.ne(character_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies `changes` to `character` and bumps `updated_at`
    pub async fn update(
        &self,
        character: entity::character::Model,
        changes: CharacterChanges,
    ) -> Result<entity::character::Model, DbErr> {
        let mut character_am = character.into_active_model();
        if let Some(name) = changes.name {
            character_am.name = ActiveValue::Set(name);
        }
        if let Some(slug) = changes.slug {
            character_am.slug = ActiveValue::Set(slug);
        }
        if let Some(game_system) = changes.game_system {
            character_am.game_system = ActiveValue::Set(game_system);
        }
        if let Some(title) = changes.title {
            character_am.title = ActiveValue::Set(Some(title));
        }
        if let Some(description) = changes.description {
            character_am.description = ActiveValue::Set(Some(description));
        }
        if let Some(portrait_url) = changes.portrait_url {
            character_am.portrait_url = ActiveValue::Set(Some(portrait_url));
        }
        if let Some(sheet) = changes.sheet {
            character_am.sheet = ActiveValue::Set(sheet);
        }
        if let Some(data) = changes.data {
            character_am.data = ActiveValue::Set(data);
        }
        character_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        character_am.update(self.db).await
    }

    /// Deletes a character
    ///
    /// Returns OK regardless of the character existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, character_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
