pub use sea_orm_migration::prelude::*;

mod m20260101_000001_user;
mod m20260101_000002_campaign;
mod m20260101_000003_character;
mod m20260101_000004_party;
mod m20260101_000005_party_character;
mod m20260101_000006_party_campaign;
mod m20260101_000007_content_override;
mod m20260101_000008_session_event;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_user::Migration),
            Box::new(m20260101_000002_campaign::Migration),
            Box::new(m20260101_000003_character::Migration),
            Box::new(m20260101_000004_party::Migration),
            Box::new(m20260101_000005_party_character::Migration),
            Box::new(m20260101_000006_party_campaign::Migration),
            Box::new(m20260101_000007_content_override::Migration),
            Box::new(m20260101_000008_session_event::Migration),
        ]
    }
}
