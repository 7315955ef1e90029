//! Training session domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::training::{SessionRatingDto, TrainingSessionDto};

/// Training session progressing Created -> Started -> Finalized.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSession {
    pub id: i32,
    pub team_id: i32,
    pub name: String,
    pub active: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl TrainingSession {
    /// True once the session has been started (roster enrolled).
    pub fn started(&self) -> bool {
        self.started_at.is_some()
    }

    /// True once the session has been finalized (ratings recorded).
    pub fn finalized(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_some()
    }

    pub fn into_dto(self) -> TrainingSessionDto {
        TrainingSessionDto {
            id: self.id,
            team_id: self.team_id,
            name: self.name,
            active: self.active,
            started_at: self.started_at,
            ended_at: self.ended_at,
        }
    }

    pub fn from_entity(entity: entity::training_session::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            name: entity.name,
            active: entity.active,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
        }
    }
}

/// Six scores recorded for one enrolled player, in fixed semantic order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub pace: i32,
    pub shooting: i32,
    pub passing: i32,
    pub dribbling: i32,
    pub defending: i32,
    pub physical: i32,
}

impl Scores {
    /// Builds scores from a six-element slice in semantic order.
    ///
    /// Callers guarantee the slice length; the rating validation in the
    /// training service enforces it before this is reached.
    pub fn from_slice(values: &[i32]) -> Self {
        Self {
            pace: values[0],
            shooting: values[1],
            passing: values[2],
            dribbling: values[3],
            defending: values[4],
            physical: values[5],
        }
    }
}

/// A player's recorded rating for a session, joined with the player name
/// for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRating {
    pub player_id: i32,
    pub player_name: String,
    pub scores: Scores,
}

impl SessionRating {
    pub fn into_dto(self) -> SessionRatingDto {
        SessionRatingDto {
            player_id: self.player_id,
            player_name: self.player_name,
            pace: self.scores.pace,
            shooting: self.scores.shooting,
            passing: self.scores.passing,
            dribbling: self.scores.dribbling,
            defending: self.scores.defending,
            physical: self.scores.physical,
        }
    }
}
