//! Training session data repository for database operations.
//!
//! Covers the session lifecycle writes (create, enroll-and-start, rate-and-
//! finalize) plus the roster and rating reads. Lifecycle *validation* lives
//! in the training service; this layer only persists transitions it is
//! handed.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    player::Player,
    training::{Scores, SessionRating, TrainingSession},
};

/// Repository providing database operations for training sessions.
pub struct TrainingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a session in the created state (inactive, no timestamps).
    ///
    /// # Returns
    /// - `Ok(TrainingSession)` - The created session
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, team_id: i32, name: String) -> Result<TrainingSession, DbErr> {
        let entity = entity::training_session::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            name: ActiveValue::Set(name),
            active: ActiveValue::Set(false),
            started_at: ActiveValue::Set(None),
            ended_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TrainingSession::from_entity(entity))
    }

    /// Finds a session by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TrainingSession>, DbErr> {
        let entity = entity::prelude::TrainingSession::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(TrainingSession::from_entity))
    }

    /// Gets all sessions of a team, in id order.
    pub async fn find_by_team(&self, team_id: i32) -> Result<Vec<TrainingSession>, DbErr> {
        let entities = entity::prelude::TrainingSession::find()
            .filter(entity::training_session::Column::TeamId.eq(team_id))
            .order_by_asc(entity::training_session::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(TrainingSession::from_entity)
            .collect())
    }

    /// Deletes a session by id.
    ///
    /// Enrollment and rating rows cascade. Callers check existence and
    /// ownership before deleting.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::TrainingSession::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Enrolls the given players and marks the session started.
    ///
    /// Writes one enrollment row per player, then sets `active` and stamps
    /// `started_at`. The id list has already been validated (no duplicates,
    /// all on the session's team).
    ///
    /// # Arguments
    /// - `session_id` - Session to start
    /// - `player_ids` - Validated roster
    ///
    /// # Returns
    /// - `Ok(TrainingSession)` - The updated session
    /// - `Err(DbErr)` - Database error; no rollback is attempted
    pub async fn start(
        &self,
        session_id: i32,
        player_ids: &[i32],
    ) -> Result<TrainingSession, DbErr> {
        for player_id in player_ids {
            entity::session_player::ActiveModel {
                session_id: ActiveValue::Set(session_id),
                player_id: ActiveValue::Set(*player_id),
            }
            .insert(self.db)
            .await?;
        }

        let entity = entity::training_session::ActiveModel {
            id: ActiveValue::Set(session_id),
            active: ActiveValue::Set(true),
            started_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(TrainingSession::from_entity(entity))
    }

    /// Records ratings and marks the session finalized.
    ///
    /// Writes one rating row per player, then clears `active` and stamps
    /// `ended_at`. Scores have already been validated (count and range).
    ///
    /// # Arguments
    /// - `session_id` - Session to finalize
    /// - `ratings` - One `(player_id, Scores)` pair per enrolled player
    ///
    /// # Returns
    /// - `Ok(TrainingSession)` - The updated session
    /// - `Err(DbErr)` - Database error; no rollback is attempted
    pub async fn finalize(
        &self,
        session_id: i32,
        ratings: &[(i32, Scores)],
    ) -> Result<TrainingSession, DbErr> {
        for (player_id, scores) in ratings {
            entity::player_rating::ActiveModel {
                session_id: ActiveValue::Set(session_id),
                player_id: ActiveValue::Set(*player_id),
                pace: ActiveValue::Set(scores.pace),
                shooting: ActiveValue::Set(scores.shooting),
                passing: ActiveValue::Set(scores.passing),
                dribbling: ActiveValue::Set(scores.dribbling),
                defending: ActiveValue::Set(scores.defending),
                physical: ActiveValue::Set(scores.physical),
            }
            .insert(self.db)
            .await?;
        }

        let entity = entity::training_session::ActiveModel {
            id: ActiveValue::Set(session_id),
            active: ActiveValue::Set(false),
            ended_at: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(TrainingSession::from_entity(entity))
    }

    /// Gets the players enrolled in a session, in id order.
    pub async fn players_for_session(&self, session_id: i32) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .join(
                JoinType::InnerJoin,
                entity::player::Relation::SessionPlayer.def(),
            )
            .filter(entity::session_player::Column::SessionId.eq(session_id))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Gets the recorded ratings of a session joined with player names.
    pub async fn ratings_for_session(&self, session_id: i32) -> Result<Vec<SessionRating>, DbErr> {
        let rows = entity::prelude::PlayerRating::find()
            .filter(entity::player_rating::Column::SessionId.eq(session_id))
            .order_by_asc(entity::player_rating::Column::PlayerId)
            .find_also_related(entity::prelude::Player)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(rating, player)| SessionRating {
                player_id: rating.player_id,
                player_name: player.map(|p| p.name).unwrap_or_default(),
                scores: Scores {
                    pace: rating.pace,
                    shooting: rating.shooting,
                    passing: rating.passing,
                    dribbling: rating.dribbling,
                    defending: rating.defending,
                    physical: rating.physical,
                },
            })
            .collect())
    }

    /// Gets every rating ever recorded for a player, across sessions.
    pub async fn ratings_for_player(&self, player_id: i32) -> Result<Vec<Scores>, DbErr> {
        let rows = entity::prelude::PlayerRating::find()
            .filter(entity::player_rating::Column::PlayerId.eq(player_id))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|rating| Scores {
                pace: rating.pace,
                shooting: rating.shooting,
                passing: rating.passing,
                dribbling: rating.dribbling,
                defending: rating.defending,
                physical: rating.physical,
            })
            .collect())
    }
}
