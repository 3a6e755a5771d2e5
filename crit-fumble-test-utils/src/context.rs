use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{
    error::TestError,
    fixtures::{
        campaign::CampaignFixtures, character::CharacterFixtures, content::ContentFixtures,
        event::EventFixtures, party::PartyFixtures, user::UserFixtures,
    },
};

/// Everything a test needs once setup has run.
pub struct TestContext {
    pub db: DatabaseConnection,
    pub session: Session,
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestContext {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            session,
            server,
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Base URL of the mock server, without a trailing slash
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }

    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures::new(&self.db)
    }

    pub fn character(&self) -> CharacterFixtures<'_> {
        CharacterFixtures::new(&self.db)
    }

    pub fn party(&self) -> PartyFixtures<'_> {
        PartyFixtures::new(&self.db)
    }

    pub fn campaign(&self) -> CampaignFixtures<'_> {
        CampaignFixtures::new(&self.db)
    }

    pub fn event(&self) -> EventFixtures<'_> {
        EventFixtures::new(&self.db)
    }

    pub fn content(&self) -> ContentFixtures<'_> {
        ContentFixtures::new(&self.db)
    }
}
