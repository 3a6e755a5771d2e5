//! Repository for users and their linked accounts.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

/// Profile fields read from the identity provider at sign in
pub struct UserIdentity {
    /// Discord user id
    pub discord_id: String,
    /// Display name
    pub name: Option<String>,
    /// Verified email, if Discord shared it
    pub email: Option<String>,
    /// Avatar URL
    pub image: Option<String>,
}

/// Profile edits, `None` leaves a field unchanged
#[derive(Default)]
pub struct ProfileChanges {
    /// New display name
    pub name: Option<String>,
    /// New slug, already checked for uniqueness
    pub slug: Option<String>,
    /// `Some(None)` clears the email
    pub email: Option<Option<String>>,
    /// `Some(None)` clears the avatar
    pub image: Option<Option<String>>,
}

/// Queries and writes for the `user` table
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with a generated ID
    pub async fn create(
        &self,
        identity: UserIdentity,
        slug: String,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            discord_id: ActiveValue::Set(identity.discord_id),
            name: ActiveValue::Set(identity.name),
            slug: ActiveValue::Set(slug),
            email: ActiveValue::Set(identity.email),
            image: ActiveValue::Set(identity.image),
            admin: ActiveValue::Set(false),
            world_anvil_id: ActiveValue::Set(None),
            world_anvil_username: ActiveValue::Set(None),
            world_anvil_token: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deactivated_at: ActiveValue::Set(None),
        };

        user.insert(self.db).await
    }

    /// Gets a user by id
    pub async fn get(&self, user_id: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Gets the user signed in with `discord_id`
    pub async fn get_by_discord_id(
        &self,
        discord_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.eq(discord_id))
            .one(self.db)
            .await
    }

    /// Returns true if any user other than `except_user_id` holds `slug`
    pub async fn slug_taken(&self, slug: &str, except_user_id: Option<&str>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Slug.eq(slug));

        if let Some(user_id) = except_user_id {
            query = query.filter(entity::user::Column::Id.ne(user_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Refreshes the identity fields of a returning user and clears any deactivation
    pub async fn sign_in(
        &self,
        user: entity::user::Model,
        identity: UserIdentity,
    ) -> Result<entity::user::Model, DbErr> {
        let mut user_am = user.into_active_model();
        if identity.name.is_some() {
            user_am.name = ActiveValue::Set(identity.name);
        }
        if identity.email.is_some() {
            user_am.email = ActiveValue::Set(identity.email);
        }
        if identity.image.is_some() {
            user_am.image = ActiveValue::Set(identity.image);
        }
        user_am.deactivated_at = ActiveValue::Set(None);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        user_am.update(self.db).await
    }

    /// Applies `changes` to a user, returning `None` for an unknown id
    pub async fn update_profile(
        &self,
        user_id: &str,
        changes: ProfileChanges,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        if let Some(name) = changes.name {
            user_am.name = ActiveValue::Set(Some(name));
        }
        if let Some(slug) = changes.slug {
            user_am.slug = ActiveValue::Set(slug);
        }
        if let Some(email) = changes.email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(image) = changes.image {
            user_am.image = ActiveValue::Set(image);
        }
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Marks a user as deactivated, users are never hard deleted
    pub async fn deactivate(&self, user_id: &str) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let now = Utc::now().naive_utc();
        let mut user_am = user.into_active_model();
        user_am.deactivated_at = ActiveValue::Set(Some(now));
        user_am.updated_at = ActiveValue::Set(now);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Stores the World Anvil account and token verified for a user
    pub async fn link_world_anvil(
        &self,
        user_id: &str,
        world_anvil_id: String,
        world_anvil_username: Option<String>,
        token: String,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.world_anvil_id = ActiveValue::Set(Some(world_anvil_id));
        user_am.world_anvil_username = ActiveValue::Set(world_anvil_username);
        user_am.world_anvil_token = ActiveValue::Set(Some(token));
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Clears the linked World Anvil id, username and token
    pub async fn unlink_world_anvil(
        &self,
        user_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.world_anvil_id = ActiveValue::Set(None);
        user_am.world_anvil_username = ActiveValue::Set(None);
        user_am.world_anvil_token = ActiveValue::Set(None);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(user_am.update(self.db).await?))
    }
}
