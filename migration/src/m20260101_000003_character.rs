use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260101_000001_user::User;

static IDX_CHARACTER_USER_ID: &str = "idx-character-user_id";
static FK_CHARACTER_USER_ID: &str = "fk-character-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(string(Character::Id).primary_key())
                    .col(string(Character::UserId))
                    .col(string(Character::Name))
                    .col(string_uniq(Character::Slug))
                    .col(string(Character::GameSystem))
                    .col(string_null(Character::Title))
                    .col(text_null(Character::Description))
                    .col(string_null(Character::PortraitUrl))
                    .col(json(Character::Sheet))
                    .col(json(Character::Data))
                    .col(timestamp(Character::CreatedAt))
                    .col(timestamp(Character::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_USER_ID)
                    .table(Character::Table)
                    .col(Character::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_USER_ID)
                    .from_tbl(Character::Table)
                    .from_col(Character::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
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
                    .name(FK_CHARACTER_USER_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_USER_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    UserId,
    Name,
    Slug,
    GameSystem,
    Title,
    Description,
    PortraitUrl,
    Sheet,
    Data,
    CreatedAt,
    UpdatedAt,
}
