//! Team data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::team::{CreateTeamParams, Team};

/// Repository providing database operations for teams.
pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new team owned by `params.user_id`.
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    /// Finds a team by id.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team found
    /// - `Ok(None)` - No team with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Gets all teams owned by a user, oldest first.
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::UserId.eq(user_id))
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Deletes a team by id.
    ///
    /// Players and training sessions cascade with the team. Callers check
    /// existence and ownership before deleting.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
