use sea_orm_migration::{prelude::*, schema::*};

static IDX_CONTENT_OVERRIDE_SOURCE_PATH: &str = "idx-content_override-source-path";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContentOverride::Table)
                    .if_not_exists()
                    .col(pk_auto(ContentOverride::Id))
                    .col(string(ContentOverride::Source))
                    .col(string(ContentOverride::Path))
                    .col(json(ContentOverride::Patch))
                    .col(timestamp(ContentOverride::CreatedAt))
                    .col(timestamp(ContentOverride::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONTENT_OVERRIDE_SOURCE_PATH)
                    .table(ContentOverride::Table)
                    .col(ContentOverride::Source)
                    .col(ContentOverride::Path)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONTENT_OVERRIDE_SOURCE_PATH)
                    .table(ContentOverride::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ContentOverride::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ContentOverride {
    Table,
    Id,
    Source,
    Path,
    Patch,
    CreatedAt,
    UpdatedAt,
}
