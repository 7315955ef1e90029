//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// The owning team and the position must already exist; pass their ids to
/// `new`.
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    position_id: i32,
    name: String,
    shirt_number: i32,
    age: i32,
    weight: i32,
    height: i32,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Player {id}"` where id is auto-incremented
    /// - shirt_number: the counter value (unique per test run)
    /// - age: 24, weight: 75 kg, height: 180 cm
    pub fn new(db: &'a DatabaseConnection, team_id: i32, position_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            position_id,
            name: format!("Player {}", id),
            shirt_number: id as i32,
            age: 24,
            weight: 75,
            height: 180,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn shirt_number(mut self, shirt_number: i32) -> Self {
        self.shirt_number = shirt_number;
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn height(mut self, height: i32) -> Self {
        self.height = height;
        self
    }

    /// Builds and inserts the player entity into the database.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            team_id: ActiveValue::Set(self.team_id),
            position_id: ActiveValue::Set(self.position_id),
            name: ActiveValue::Set(self.name),
            shirt_number: ActiveValue::Set(self.shirt_number),
            age: ActiveValue::Set(self.age),
            weight: ActiveValue::Set(self.weight),
            height: ActiveValue::Set(self.height),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player on `team_id` at `position_id` with default values.
pub async fn create_player(
    db: &DatabaseConnection,
    team_id: i32,
    position_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, team_id, position_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory;

    #[tokio::test]
    async fn creates_player_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_roster_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, team, position, player) =
            factory::helpers::create_player_with_dependencies(db).await?;

        assert_eq!(player.team_id, team.id);
        assert_eq!(player.position_id, position.id);

        Ok(())
    }
}
