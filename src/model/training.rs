use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingSessionDto {
    pub id: i32,
    pub team_id: i32,
    pub name: String,
    pub active: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

/// Roster submitted when starting a session.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StartSessionDto {
    pub player_ids: Vec<i32>,
}

/// Ratings submitted when finalizing a session.
///
/// `scores` carries six values per player id, concatenated in roster order:
/// pace, shooting, passing, dribbling, defending, physical.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FinalizeSessionDto {
    pub player_ids: Vec<i32>,
    pub scores: Vec<i32>,
}

/// One enrolled player's scores for a finalized session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionRatingDto {
    pub player_id: i32,
    pub player_name: String,
    pub pace: i32,
    pub shooting: i32,
    pub passing: i32,
    pub dribbling: i32,
    pub defending: i32,
    pub physical: i32,
}
