use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260101_000001_user::User;

static IDX_CAMPAIGN_GM_USER_ID: &str = "idx-campaign-gm_user_id";
static FK_CAMPAIGN_GM_USER_ID: &str = "fk-campaign-gm_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campaign::Table)
                    .if_not_exists()
                    .col(string(Campaign::Id).primary_key())
                    .col(string(Campaign::Name))
                    .col(string_uniq(Campaign::Slug))
                    .col(text_null(Campaign::Description))
                    .col(string(Campaign::GameSystem))
                    .col(string(Campaign::GmUserId))
                    .col(string_null(Campaign::WorldAnvilWorldId))
                    .col(timestamp(Campaign::CreatedAt))
                    .col(timestamp(Campaign::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CAMPAIGN_GM_USER_ID)
                    .table(Campaign::Table)
                    .col(Campaign::GmUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CAMPAIGN_GM_USER_ID)
                    .from_tbl(Campaign::Table)
                    .from_col(Campaign::GmUserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CAMPAIGN_GM_USER_ID)
                    .table(Campaign::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CAMPAIGN_GM_USER_ID)
                    .table(Campaign::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Campaign::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Campaign {
    Table,
    Id,
    Name,
    Slug,
    Description,
    GameSystem,
    GmUserId,
    WorldAnvilWorldId,
    CreatedAt,
    UpdatedAt,
}
