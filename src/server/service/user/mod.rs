//! User account service.
//!
//! Users are created at their first Discord sign in and never hard deleted. Deleting an
//! account deactivates it, signing in again reactivates it.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UpdateUserDto,
    server::{
        data::user::{ProfileChanges, UserIdentity, UserRepository},
        error::{request::RequestError, Error},
        model::auth::WorldAnvilIdentity,
        util::slug::{slugify, with_suffix},
    },
};

/// Slug base for users whose name has no sluggable characters
static FALLBACK_USER_SLUG: &str = "user";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<entity::user::Model>, Error> {
        Ok(UserRepository::new(self.db).get(user_id).await?)
    }

    /// Signs in the user with the identity's Discord ID, creating them on first sign in.
    ///
    /// Returning users have their profile refreshed and any deactivation cleared. New users
    /// get a unique slug derived from their name.
    pub async fn get_or_create_user(
        &self,
        identity: UserIdentity,
    ) -> Result<entity::user::Model, Error> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.get_by_discord_id(&identity.discord_id).await? {
            let was_deactivated = user.deactivated_at.is_some();
            let user = user_repo.sign_in(user, identity).await?;

            if was_deactivated {
                tracing::info!(user_id = %user.id, "Reactivated user on sign in");
            }

            return Ok(user);
        }

        let slug = self
            .unique_slug(identity.name.as_deref().unwrap_or_default(), None)
            .await?;
        let user = user_repo.create(identity, slug).await?;

        tracing::info!(user_id = %user.id, slug = %user.slug, "Created user");

        Ok(user)
    }

    /// Applies a profile edit, re-slugging the user when the name changes.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated user
    /// - `Ok(None)`: No user with `user_id`
    /// - `Err(RequestError::Validation)`: The new name is blank or has no sluggable characters
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: UpdateUserDto,
    ) -> Result<Option<entity::user::Model>, Error> {
        let mut changes = ProfileChanges {
            email: update.email,
            image: update.image,
            ..Default::default()
        };

        if let Some(name) = update.name {
            let name = name.trim().to_string();
            if slugify(&name).is_empty() {
                return Err(RequestError::validation("Name must contain letters or numbers").into());
            }

            changes.slug = Some(self.unique_slug(&name, Some(user_id)).await?);
            changes.name = Some(name);
        }

        Ok(UserRepository::new(self.db)
            .update_profile(user_id, changes)
            .await?)
    }

    pub async fn deactivate(&self, user_id: &str) -> Result<Option<entity::user::Model>, Error> {
        let user = UserRepository::new(self.db).deactivate(user_id).await?;

        if user.is_some() {
            tracing::info!(user_id, "Deactivated user");
        }

        Ok(user)
    }

    /// World Anvil token the user linked, if any
    pub async fn world_anvil_token(&self, user_id: &str) -> Result<Option<String>, Error> {
        Ok(UserRepository::new(self.db)
            .get(user_id)
            .await?
            .and_then(|user| user.world_anvil_token))
    }

    pub async fn link_world_anvil(
        &self,
        user_id: &str,
        identity: WorldAnvilIdentity,
        token: String,
    ) -> Result<Option<entity::user::Model>, Error> {
        Ok(UserRepository::new(self.db)
            .link_world_anvil(user_id, identity.id, identity.username, token)
            .await?)
    }

    /// Removes the user's World Anvil link and stored token
    pub async fn unlink_world_anvil(
        &self,
        user_id: &str,
    ) -> Result<Option<entity::user::Model>, Error> {
        let user = UserRepository::new(self.db)
            .unlink_world_anvil(user_id)
            .await?;

        if user.is_some() {
            tracing::info!(user_id, "Unlinked World Anvil account");
        }

        Ok(user)
    }

    /// First free slug for `name`, ignoring the slug `except_user_id` already holds
    async fn unique_slug(&self, name: &str, except_user_id: Option<&str>) -> Result<String, Error> {
        let user_repo = UserRepository::new(self.db);

        let mut base = slugify(name);
        if base.is_empty() {
            base = FALLBACK_USER_SLUG.to_string();
        }

        let mut attempt = 1;
        loop {
            let slug = with_suffix(&base, attempt);
            if !user_repo.slug_taken(&slug, except_user_id).await? {
                return Ok(slug);
            }
            attempt += 1;
        }
    }
}
