use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260101_000003_character::Character, m20260101_000004_party::Party};

static FK_PARTY_CHARACTER_PARTY_ID: &str = "fk-party_character-party_id";
static FK_PARTY_CHARACTER_CHARACTER_ID: &str = "fk-party_character-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartyCharacter::Table)
                    .if_not_exists()
                    .col(string(PartyCharacter::PartyId))
                    .col(string(PartyCharacter::CharacterId))
                    .col(timestamp(PartyCharacter::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(PartyCharacter::PartyId)
                            .col(PartyCharacter::CharacterId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARTY_CHARACTER_PARTY_ID)
                    .from_tbl(PartyCharacter::Table)
                    .from_col(PartyCharacter::PartyId)
                    .to_tbl(Party::Table)
                    .to_col(Party::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARTY_CHARACTER_CHARACTER_ID)
                    .from_tbl(PartyCharacter::Table)
                    .from_col(PartyCharacter::CharacterId)
                    .to_tbl(Character::Table)
                    .to_col(Character::Id)
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
                    .name(FK_PARTY_CHARACTER_CHARACTER_ID)
                    .table(PartyCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PARTY_CHARACTER_PARTY_ID)
                    .table(PartyCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PartyCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PartyCharacter {
    Table,
    PartyId,
    CharacterId,
    CreatedAt,
}
