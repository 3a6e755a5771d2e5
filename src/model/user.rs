use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: String,
    pub discord_id: String,
    pub name: Option<String>,
    pub slug: String,
    pub email: Option<String>,
    pub image: Option<String>,
    pub admin: bool,
    pub world_anvil_username: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            discord_id: user.discord_id,
            name: user.name,
            slug: user.slug,
            email: user.email,
            image: user.image,
            admin: user.admin,
            world_anvil_username: user.world_anvil_username,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Profile edit submitted to `PUT /api/user`.
///
/// `email` and `image` distinguish an absent key (leave unchanged) from an
/// explicit `null` (clear the value).
#[derive(Clone, Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserDto {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub image: Option<Option<String>>,
}

/// Body of `POST /api/account/worldanvil`
#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct LinkWorldAnvilDto {
    pub token: String,
}

/// Wraps a present field in `Some` so that `null` becomes `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Returns true when `value` is an object carrying a string `id`.
///
/// Used to validate identities returned by Discord and World Anvil before
/// they are trusted.
pub fn is_user(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|object| object.get("id"))
        .is_some_and(Value::is_string)
}

/// Returns true when `value` is an object with a string `id`, or with an
/// `email` that is either a string or `null`.
pub fn is_partial_user(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };

    object.get("id").is_some_and(Value::is_string)
        || object
            .get("email")
            .is_some_and(|email| email.is_string() || email.is_null())
}
