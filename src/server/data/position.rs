//! Position data repository.
//!
//! Positions are static reference data seeded by migration; only reads are
//! exposed.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::player::Position;

pub struct PositionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PositionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all positions in id order.
    pub async fn find_all(&self) -> Result<Vec<Position>, DbErr> {
        let entities = entity::prelude::Position::find()
            .order_by_asc(entity::position::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Position::from_entity).collect())
    }

    /// Checks whether a position id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::Position::find_by_id(id).one(self.db).await?;

        Ok(entity.is_some())
    }
}
