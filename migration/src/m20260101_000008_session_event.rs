use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260101_000002_campaign::Campaign;

static IDX_SESSION_EVENT_START_TIME: &str = "idx-session_event-start_time";
static FK_SESSION_EVENT_CAMPAIGN_ID: &str = "fk-session_event-campaign_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SessionEvent::Table)
                    .if_not_exists()
                    .col(string(SessionEvent::Id).primary_key())
                    .col(string_null(SessionEvent::CampaignId))
                    .col(string(SessionEvent::Name))
                    .col(text_null(SessionEvent::Description))
                    .col(string_null(SessionEvent::Location))
                    .col(string_null(SessionEvent::ChannelId))
                    .col(timestamp(SessionEvent::StartTime))
                    .col(boolean(SessionEvent::NotificationSent).default(false))
                    .col(timestamp(SessionEvent::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SESSION_EVENT_START_TIME)
                    .table(SessionEvent::Table)
                    .col(SessionEvent::StartTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SESSION_EVENT_CAMPAIGN_ID)
                    .from_tbl(SessionEvent::Table)
                    .from_col(SessionEvent::CampaignId)
                    .to_tbl(Campaign::Table)
                    .to_col(Campaign::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SESSION_EVENT_CAMPAIGN_ID)
                    .table(SessionEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SESSION_EVENT_START_TIME)
                    .table(SessionEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SessionEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SessionEvent {
    Table,
    Id,
    CampaignId,
    Name,
    Description,
    Location,
    ChannelId,
    StartTime,
    NotificationSent,
    CreatedAt,
}
