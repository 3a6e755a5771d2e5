use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260101_000002_campaign::Campaign, m20260101_000004_party::Party};

static FK_PARTY_CAMPAIGN_PARTY_ID: &str = "fk-party_campaign-party_id";
static FK_PARTY_CAMPAIGN_CAMPAIGN_ID: &str = "fk-party_campaign-campaign_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartyCampaign::Table)
                    .if_not_exists()
                    .col(string(PartyCampaign::PartyId))
                    .col(string(PartyCampaign::CampaignId))
                    .col(timestamp(PartyCampaign::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(PartyCampaign::PartyId)
                            .col(PartyCampaign::CampaignId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARTY_CAMPAIGN_PARTY_ID)
                    .from_tbl(PartyCampaign::Table)
                    .from_col(PartyCampaign::PartyId)
                    .to_tbl(Party::Table)
                    .to_col(Party::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARTY_CAMPAIGN_CAMPAIGN_ID)
                    .from_tbl(PartyCampaign::Table)
                    .from_col(PartyCampaign::CampaignId)
                    .to_tbl(Campaign::Table)
                    .to_col(Campaign::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PARTY_CAMPAIGN_CAMPAIGN_ID)
                    .table(PartyCampaign::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PARTY_CAMPAIGN_PARTY_ID)
                    .table(PartyCampaign::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PartyCampaign::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PartyCampaign {
    Table,
    PartyId,
    CampaignId,
    CreatedAt,
}
