use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CronJobDto {
    pub name: String,
    pub schedule: String,
    pub running: bool,
}

/// Body of `POST /api/admin/bot/cronjobs/toggle`
#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct ToggleCronJobDto {
    pub name: String,
    pub enabled: bool,
}
