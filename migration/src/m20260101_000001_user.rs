use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string_uniq(User::DiscordId))
                    .col(string_null(User::Name))
                    .col(string_uniq(User::Slug))
                    .col(string_null(User::Email))
                    .col(string_null(User::Image))
                    .col(boolean(User::Admin).default(false))
                    .col(string_null(User::WorldAnvilId))
                    .col(string_null(User::WorldAnvilUsername))
                    .col(string_null(User::WorldAnvilToken))
                    .col(timestamp(User::CreatedAt))
                    .col(timestamp(User::UpdatedAt))
                    .col(timestamp_null(User::DeactivatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    DiscordId,
    Name,
    Slug,
    Email,
    Image,
    Admin,
    WorldAnvilId,
    WorldAnvilUsername,
    WorldAnvilToken,
    CreatedAt,
    UpdatedAt,
    DeactivatedAt,
}
