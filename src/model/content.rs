use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// External content API a resource is fetched from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ContentSourceKind {
    /// D&D 5e SRD API
    Srd,
    /// 5eTools site mirror
    Tools,
    /// 5eTools data mirror
    ToolsData,
    /// World Anvil external API
    WorldAnvil,
}

impl ContentSourceKind {
    /// Key stored alongside content overrides
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Srd => "srd",
            Self::Tools => "tools",
            Self::ToolsData => "tools-data",
            Self::WorldAnvil => "world-anvil",
        }
    }
}

impl std::fmt::Display for ContentSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContentOverrideDto {
    pub id: i32,
    pub source: String,
    pub path: String,
    #[schema(value_type = Object)]
    pub patch: Value,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::content_override::Model> for ContentOverrideDto {
    fn from(model: entity::content_override::Model) -> Self {
        Self {
            id: model.id,
            source: model.source,
            path: model.path,
            patch: model.patch,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Body of `PUT /api/admin/content-overrides`
#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct UpsertContentOverrideDto {
    pub source: ContentSourceKind,
    /// Resource path relative to the source's base URL, e.g. `bestiary/goblin.json`
    pub path: String,
    #[schema(value_type = Object)]
    pub patch: Value,
}

/// Body of `DELETE /api/admin/content-overrides`
#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct DeleteContentOverrideDto {
    pub source: ContentSourceKind,
    pub path: String,
}
