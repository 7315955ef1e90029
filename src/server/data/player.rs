//! Player data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::player::{InsertPlayerParams, Player};

/// Repository providing database operations for players.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new player.
    ///
    /// Team and position existence are validated by the player service
    /// before this is called; the foreign keys back that up at the schema
    /// level.
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, params: InsertPlayerParams) -> Result<Player, DbErr> {
        let entity = entity::player::ActiveModel {
            team_id: ActiveValue::Set(params.team_id),
            position_id: ActiveValue::Set(params.position_id),
            name: ActiveValue::Set(params.name),
            shirt_number: ActiveValue::Set(params.shirt_number),
            age: ActiveValue::Set(params.age),
            weight: ActiveValue::Set(params.weight),
            height: ActiveValue::Set(params.height),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Player::from_entity(entity))
    }

    /// Finds a player by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Finds all players whose id is in `ids`.
    ///
    /// Missing ids are silently absent from the result; callers compare
    /// lengths when every id must resolve.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Gets all players of a team, in id order.
    pub async fn find_by_team(&self, team_id: i32) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Gets all players across every team owned by a user.
    pub async fn find_by_user(&self, user_id: i32) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .join(JoinType::InnerJoin, entity::player::Relation::Team.def())
            .filter(entity::team::Column::UserId.eq(user_id))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Deletes a player by id.
    ///
    /// Enrollment and rating rows cascade with the player. Callers check
    /// existence and ownership before deleting.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
