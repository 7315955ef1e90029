//! Training session factory for creating test session entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test training sessions.
///
/// Sessions are created in the initial lifecycle state (inactive, no
/// timestamps) unless `started()` or `finalized()` is called.
pub struct TrainingSessionFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    name: String,
    active: bool,
    started: bool,
    ended: bool,
}

impl<'a> TrainingSessionFactory<'a> {
    /// Creates a new TrainingSessionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Session {id}"` where id is auto-incremented
    /// - state: created (inactive, both timestamps null)
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            name: format!("Session {}", id),
            active: false,
            started: false,
            ended: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Puts the session in the started state (active, start timestamp set).
    pub fn started(mut self) -> Self {
        self.active = true;
        self.started = true;
        self
    }

    /// Puts the session in the finalized state (inactive, both timestamps set).
    pub fn finalized(mut self) -> Self {
        self.active = false;
        self.started = true;
        self.ended = true;
        self
    }

    /// Builds and inserts the training session entity into the database.
    pub async fn build(self) -> Result<entity::training_session::Model, DbErr> {
        let now = Utc::now();
        entity::training_session::ActiveModel {
            team_id: ActiveValue::Set(self.team_id),
            name: ActiveValue::Set(self.name),
            active: ActiveValue::Set(self.active),
            started_at: ActiveValue::Set(self.started.then_some(now)),
            ended_at: ActiveValue::Set(self.ended.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a training session for `team_id` in the created state.
pub async fn create_training_session(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::training_session::Model, DbErr> {
    TrainingSessionFactory::new(db, team_id).build().await
}
