//! Character service.
//!
//! Characters belong to one user. Only the owner or an admin may change or delete one.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

use crate::{
    model::{
        character::{CreateCharacterDto, UpdateCharacterDto},
        system::GameSystem,
        user::UserDto,
    },
    server::{
        data::character::{CharacterChanges, CharacterRepository, NewCharacter},
        error::{request::RequestError, Error},
        util::slug::{slugify, with_suffix},
    },
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Characters owned by the user, newest first
    pub async fn get_user_characters(
        &self,
        user_id: &str,
    ) -> Result<Vec<entity::character::Model>, Error> {
        Ok(CharacterRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::character::Model>, Error> {
        Ok(CharacterRepository::new(self.db).get_by_slug(slug).await?)
    }

    /// Creates a character owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(Model)`: The new character with a unique slug
    /// - `Err(RequestError::Validation)`: Missing or unsluggable name, or unknown game system
    pub async fn create_character(
        &self,
        user_id: &str,
        character: CreateCharacterDto,
    ) -> Result<entity::character::Model, Error> {
        let name = validate_name(character.name.as_deref())?;
        let game_system = validate_game_system(character.game_system.as_deref())?;
        let slug = self.unique_slug(&name, None).await?;

        let character = CharacterRepository::new(self.db)
            .create(NewCharacter {
                user_id: user_id.to_string(),
                name,
                slug,
                game_system,
                title: character.title,
                description: character.description,
                portrait_url: character.portrait_url,
                sheet: character.sheet.unwrap_or_else(empty_object),
                data: character.data.unwrap_or_else(empty_object),
            })
            .await?;

        tracing::debug!(character_id = %character.id, user_id, "Created character");

        Ok(character)
    }

    /// Updates a character on behalf of `actor`.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated character, re-slugged when renamed
    /// - `Err(RequestError::NotFound)`: No character with `character_id`
    /// - `Err(RequestError::Forbidden)`: `actor` neither owns the character nor is an admin
    /// - `Err(RequestError::Validation)`: Invalid name or game system
    pub async fn update_character(
        &self,
        actor: &UserDto,
        character_id: &str,
        update: UpdateCharacterDto,
    ) -> Result<entity::character::Model, Error> {
        let character = self.get_authorized(actor, character_id).await?;

        let mut changes = CharacterChanges {
            title: update.title,
            description: update.description,
            portrait_url: update.portrait_url,
            sheet: update.sheet,
            data: update.data,
            ..Default::default()
        };
        if update.game_system.is_some() {
            changes.game_system = Some(validate_game_system(update.game_system.as_deref())?);
        }
        if update.name.is_some() {
            let name = validate_name(update.name.as_deref())?;
            changes.slug = Some(self.unique_slug(&name, Some(&character.id)).await?);
            changes.name = Some(name);
        }

        Ok(CharacterRepository::new(self.db)
            .update(character, changes)
            .await?)
    }

    /// Deletes a character on behalf of `actor`, returning the deleted ID
    pub async fn delete_character(
        &self,
        actor: &UserDto,
        character_id: &str,
    ) -> Result<String, Error> {
        let character = self.get_authorized(actor, character_id).await?;

        CharacterRepository::new(self.db).delete(&character.id).await?;

        tracing::debug!(character_id = %character.id, user_id = %actor.id, "Deleted character");

        Ok(character.id)
    }

    async fn get_authorized(
        &self,
        actor: &UserDto,
        character_id: &str,
    ) -> Result<entity::character::Model, Error> {
        let Some(character) = CharacterRepository::new(self.db).get(character_id).await? else {
            return Err(RequestError::NotFound("Character").into());
        };

        if character.user_id != actor.id && !actor.admin {
            return Err(RequestError::Forbidden.into());
        }

        Ok(character)
    }

    async fn unique_slug(&self, name: &str, except_id: Option<&str>) -> Result<String, Error> {
        let character_repo = CharacterRepository::new(self.db);
        let base = slugify(name);

        let mut attempt = 1;
        loop {
            let slug = with_suffix(&base, attempt);
            if !character_repo.slug_taken(&slug, except_id).await? {
                return Ok(slug);
            }
            attempt += 1;
        }
    }
}

/// Trims the name and checks it produces a slug
pub(crate) fn validate_name(name: Option<&str>) -> Result<String, RequestError> {
    let name = name.map(str::trim).unwrap_or_default();

    if name.is_empty() {
        return Err(RequestError::validation("Name is required"));
    }
    if slugify(name).is_empty() {
        return Err(RequestError::validation("Name must contain letters or numbers"));
    }

    Ok(name.to_string())
}

pub(crate) fn validate_game_system(requested: Option<&str>) -> Result<String, RequestError> {
    GameSystem::resolve(requested)
        .map(|system| system.id.to_string())
        .ok_or_else(|| {
            RequestError::validation(format!(
                "Unknown game system {:?}",
                requested.unwrap_or_default()
            ))
        })
}

fn empty_object() -> Value {
    json!({})
}
