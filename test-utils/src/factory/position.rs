//! Position factory for creating test position reference rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a position with a unique generated name.
pub async fn create_position(db: &DatabaseConnection) -> Result<entity::position::Model, DbErr> {
    create_position_named(db, format!("Position {}", next_id())).await
}

/// Creates a position with the given name.
pub async fn create_position_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::position::Model, DbErr> {
    entity::position::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
