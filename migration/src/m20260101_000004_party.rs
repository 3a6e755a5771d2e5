use sea_orm_migration::{prelude::*, schema::*};

static FK_PARTY_PARENT_ID: &str = "fk-party-parent_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Party::Table)
                    .if_not_exists()
                    .col(string(Party::Id).primary_key())
                    .col(string(Party::Name))
                    .col(string_uniq(Party::Slug))
                    .col(string_null(Party::ParentId))
                    .col(timestamp(Party::CreatedAt))
                    .col(timestamp(Party::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARTY_PARENT_ID)
                    .from_tbl(Party::Table)
                    .from_col(Party::ParentId)
                    .to_tbl(Party::Table)
                    .to_col(Party::Id)
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
                    .name(FK_PARTY_PARENT_ID)
                    .table(Party::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Party::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Party {
    Table,
    Id,
    Name,
    Slug,
    ParentId,
    CreatedAt,
    UpdatedAt,
}
