//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// The owning user must already exist; pass its id to `new`.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Team {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team owned by `user_id` with default values.
pub async fn create_team(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, user_id).build().await
}
