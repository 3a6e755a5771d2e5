//! Declarative test setup.
//!
//! Configuration methods only queue work, `build()` creates the tables and mock endpoints
//! in the order they were declared.

use mockito::{Matcher, Mock, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};
use serde_json::Value;

use crate::{context::TestContext, error::TestError};

type MockBuilder = Box<dyn FnOnce(&mut ServerGuard) -> Mock>;

/// Builder for declarative test initialization.
pub struct TestBuilder {
    include_app_tables: bool,
    tables: Vec<TableCreateStatement>,
    mock_builders: Vec<MockBuilder>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            include_app_tables: false,
            tables: Vec::new(),
            mock_builders: Vec::new(),
        }
    }

    /// Create every application table, parents before children so foreign keys resolve.
    pub fn with_app_tables(mut self) -> Self {
        self.include_app_tables = true;
        self
    }

    /// Create the table for a single entity.
    ///
    /// Chain multiple calls to add multiple tables, the order of calls is the order of
    /// creation.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Register an arbitrary mock endpoint on the mock server.
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Register an endpoint answering `method path` with a JSON body.
    ///
    /// Any query string is accepted. The mock expects to be hit `expected_requests` times,
    /// checked by [`TestContext::assert_mocks`].
    pub fn with_json_endpoint(
        self,
        method: &'static str,
        path: impl Into<String>,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        let path = path.into();

        self.with_mock_endpoint(move |server| {
            server
                .mock(method, path.as_str())
                .match_query(Matcher::Any)
                .with_status(status)
                .with_header("content-type", "application/json")
                .with_body(body.to_string())
                .expect(expected_requests)
                .create()
        })
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        let mut all_tables = Vec::new();
        if self.include_app_tables {
            let schema = Schema::new(DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Campaign),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Party),
                schema.create_table_from_entity(entity::prelude::PartyCharacter),
                schema.create_table_from_entity(entity::prelude::PartyCampaign),
                schema.create_table_from_entity(entity::prelude::ContentOverride),
                schema.create_table_from_entity(entity::prelude::SessionEvent),
            ]);
        }
        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        let mut mocks = Vec::new();
        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }
        context.mocks = mocks;

        Ok(context)
    }
}
