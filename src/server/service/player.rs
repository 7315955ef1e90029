use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        player::PlayerRepository, position::PositionRepository, team::TeamRepository,
        training::TrainingRepository,
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        player::{InsertPlayerParams, Player, PlayerStats},
        user::User,
    },
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a player after validating its references.
    ///
    /// A missing team or position is a payload problem (400), not a missing
    /// target resource; an existing team owned by someone else is an
    /// ownership violation (401).
    pub async fn insert(&self, user: &User, params: InsertPlayerParams) -> Result<Player, AppError> {
        let Some(team) = TeamRepository::new(self.db).find_by_id(params.team_id).await? else {
            return Err(AppError::BadRequest("Team does not exist".to_string()));
        };

        AuthGuard::ensure_owner(user, &team)?;

        if !PositionRepository::new(self.db).exists(params.position_id).await? {
            return Err(AppError::BadRequest("Position does not exist".to_string()));
        }

        let player = PlayerRepository::new(self.db).insert(params).await?;

        Ok(player)
    }

    /// Computes per-score averages across the player's rated sessions.
    ///
    /// A player who has never been rated gets zeroed averages and a zero
    /// session count.
    pub async fn stats(&self, player_id: i32) -> Result<PlayerStats, AppError> {
        let ratings = TrainingRepository::new(self.db)
            .ratings_for_player(player_id)
            .await?;

        let sessions_rated = ratings.len() as u64;
        if sessions_rated == 0 {
            return Ok(PlayerStats {
                player_id,
                sessions_rated,
                pace: 0.0,
                shooting: 0.0,
                passing: 0.0,
                dribbling: 0.0,
                defending: 0.0,
                physical: 0.0,
            });
        }

        let count = sessions_rated as f64;

        Ok(PlayerStats {
            player_id,
            sessions_rated,
            pace: ratings.iter().map(|s| s.pace as f64).sum::<f64>() / count,
            shooting: ratings.iter().map(|s| s.shooting as f64).sum::<f64>() / count,
            passing: ratings.iter().map(|s| s.passing as f64).sum::<f64>() / count,
            dribbling: ratings.iter().map(|s| s.dribbling as f64).sum::<f64>() / count,
            defending: ratings.iter().map(|s| s.defending as f64).sum::<f64>() / count,
            physical: ratings.iter().map(|s| s.physical as f64).sum::<f64>() / count,
        })
    }
}
