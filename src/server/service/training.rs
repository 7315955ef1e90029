//! Training session lifecycle logic.
//!
//! Sessions progress Created -> Started -> Finalized; no transition skips a
//! state and none reverses. The start and finalize transitions validate
//! their payload against the roster rules before any write. State checks are
//! plain reads, not transactional guards; two racing requests on the same
//! session are not serialized here.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{player::PlayerRepository, team::TeamRepository, training::TrainingRepository},
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        training::{Scores, SessionRating, TrainingSession},
        user::User,
    },
    util::roster,
};

/// Number of scores recorded per player at finalize time.
pub const SCORES_PER_PLAYER: usize = 6;

/// Highest admissible score value (scores range 0..=MAX_SCORE).
pub const MAX_SCORE: i32 = 10;

pub struct TrainingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a roster into a session and marks it started.
    ///
    /// Precondition order: requester owns the session's team, session has
    /// not been started before, no duplicate ids, every player exists on
    /// the session's team. On success the enrollment set is persisted, the
    /// session becomes active and the start timestamp is stamped.
    pub async fn start(
        &self,
        user: &User,
        session: &TrainingSession,
        player_ids: &[i32],
    ) -> Result<TrainingSession, AppError> {
        self.authorize_owner(user, session.team_id).await?;

        if session.started() {
            return Err(AppError::BadRequest(
                "Training session has already been started".to_string(),
            ));
        }

        if roster::has_duplicates(player_ids) {
            return Err(AppError::BadRequest("Duplicate player ids".to_string()));
        }

        let players = PlayerRepository::new(self.db).find_by_ids(player_ids).await?;

        if players.len() != player_ids.len() {
            return Err(AppError::BadRequest(
                "A submitted player does not exist".to_string(),
            ));
        }

        if !roster::team_membership_valid(&players, session.team_id) {
            return Err(AppError::BadRequest(
                "A submitted player does not belong to the session's team".to_string(),
            ));
        }

        let updated = TrainingRepository::new(self.db)
            .start(session.id, player_ids)
            .await?;

        Ok(updated)
    }

    /// Records ratings for a session and marks it finalized.
    ///
    /// Precondition order: id and score lists non-empty, session active, no
    /// duplicate ids, requester owns the session's team, submitted ids
    /// exactly match the enrolled roster, exactly six scores per player,
    /// every score within range. On success one rating row is written per
    /// player, the session becomes inactive and the end timestamp is
    /// stamped.
    ///
    /// `scores` carries six values per id, concatenated in roster order:
    /// pace, shooting, passing, dribbling, defending, physical.
    pub async fn finalize(
        &self,
        user: &User,
        session: &TrainingSession,
        player_ids: &[i32],
        scores: &[i32],
    ) -> Result<TrainingSession, AppError> {
        if player_ids.is_empty() || scores.is_empty() {
            return Err(AppError::BadRequest(
                "Player ids and scores are required".to_string(),
            ));
        }

        if !session.active {
            return Err(AppError::BadRequest(
                "Training session is not active".to_string(),
            ));
        }

        if roster::has_duplicates(player_ids) {
            return Err(AppError::BadRequest("Duplicate player ids".to_string()));
        }

        self.authorize_owner(user, session.team_id).await?;

        let repo = TrainingRepository::new(self.db);
        let enrolled = repo.players_for_session(session.id).await?;

        if !roster::enrollment_matches(player_ids, &enrolled) {
            return Err(AppError::BadRequest(
                "Submitted ids do not match the enrolled roster".to_string(),
            ));
        }

        if scores.len() != player_ids.len() * SCORES_PER_PLAYER {
            return Err(AppError::BadRequest(format!(
                "Exactly {} scores between 0 and {} are required per player",
                SCORES_PER_PLAYER, MAX_SCORE
            )));
        }

        if scores.iter().any(|s| *s < 0 || *s > MAX_SCORE) {
            return Err(AppError::BadRequest(format!(
                "Scores must be between 0 and {}",
                MAX_SCORE
            )));
        }

        let ratings: Vec<(i32, Scores)> = player_ids
            .iter()
            .zip(scores.chunks_exact(SCORES_PER_PLAYER))
            .map(|(player_id, chunk)| (*player_id, Scores::from_slice(chunk)))
            .collect();

        let updated = repo.finalize(session.id, &ratings).await?;

        Ok(updated)
    }

    /// Reads the recorded ratings of a finalized session.
    ///
    /// Ownership is checked before the lifecycle state, so a non-owner gets
    /// 401 regardless of whether the session has been finalized; the owner
    /// of an unfinalized session gets 400.
    pub async fn ratings(
        &self,
        user: &User,
        session: &TrainingSession,
    ) -> Result<Vec<SessionRating>, AppError> {
        self.authorize_owner(user, session.team_id).await?;

        if !session.finalized() {
            return Err(AppError::BadRequest(
                "Training session is not finalized".to_string(),
            ));
        }

        let ratings = TrainingRepository::new(self.db)
            .ratings_for_session(session.id)
            .await?;

        Ok(ratings)
    }

    /// Loads the session's team and applies the ownership predicate.
    async fn authorize_owner(&self, user: &User, team_id: i32) -> Result<(), AppError> {
        let team = TeamRepository::new(self.db)
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        AuthGuard::ensure_owner(user, &team)
    }
}
