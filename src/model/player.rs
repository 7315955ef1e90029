use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerDto {
    pub id: i32,
    pub team_id: i32,
    pub position_id: i32,
    pub name: String,
    pub shirt_number: i32,
    pub age: i32,
    pub weight: i32,
    pub height: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreatePlayerDto {
    pub team_id: i32,
    pub position_id: i32,
    pub name: String,
    pub shirt_number: i32,
    pub age: i32,
    pub weight: i32,
    pub height: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PositionDto {
    pub id: i32,
    pub name: String,
}

/// Average of each score over the player's rated sessions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerStatsDto {
    pub player_id: i32,
    /// Number of finalized sessions the player has been rated in.
    pub sessions_rated: u64,
    pub pace: f64,
    pub shooting: f64,
    pub passing: f64,
    pub dribbling: f64,
    pub defending: f64,
    pub physical: f64,
}
