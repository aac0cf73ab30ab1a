use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, ConfirmationCode};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(ConfirmationCode)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index that cannot be derived from the entity definition, such as a
    /// composite unique key created by a migration.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the user aggregate tables.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - UserAttribute
    /// - ConfirmationCode
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
            .with_table(UserAttribute)
            .with_table(ConfirmationCode)
    }

    /// Adds every table required for subscription operations.
    ///
    /// Equivalent to `with_user_tables()` followed by the reference data tables
    /// (Language, AlertType) and Subscription, plus the unique (user, alert type) index.
    pub fn with_subscription_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Language)
            .with_table(AlertType)
            .with_table(Subscription)
            .with_index(
                Index::create()
                    .name("uq_subscription_user_alert_type")
                    .table(Subscription)
                    .col(entity::subscription::Column::UserId)
                    .col(entity::subscription::Column::AlertTypeId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds the audit event log table.
    pub fn with_event_tables(self) -> Self {
        self.with_table(EventLog)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added to the builder, in order, followed by any indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
