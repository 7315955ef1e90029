use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Add entity tables in dependency order (tables
/// with foreign keys after their referenced tables), then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Team, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Team)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Chain multiple calls to add multiple
    /// tables.
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

    /// Adds all tables required for roster operations.
    ///
    /// Convenience method adding User, Team, Position and Player in
    /// dependency order. Use `with_training_tables()` when session
    /// enrollment or ratings are involved.
    pub fn with_roster_tables(self) -> Self {
        self.with_table(User)
            .with_table(Team)
            .with_table(Position)
            .with_table(Player)
    }

    /// Adds all tables required for training session operations.
    ///
    /// Equivalent to `with_roster_tables()` followed by the session,
    /// enrollment and rating tables.
    pub fn with_training_tables(self) -> Self {
        self.with_roster_tables()
            .with_table(TrainingSession)
            .with_table(SessionPlayer)
            .with_table(PlayerRating)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
