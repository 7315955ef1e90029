//! Player domain models and parameters.

use crate::model::player::{PlayerDto, PlayerStatsDto, PositionDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub team_id: i32,
    pub position_id: i32,
    pub name: String,
    pub shirt_number: i32,
    pub age: i32,
    pub weight: i32,
    pub height: i32,
}

impl Player {
    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            team_id: self.team_id,
            position_id: self.position_id,
            name: self.name,
            shirt_number: self.shirt_number,
            age: self.age,
            weight: self.weight,
            height: self.height,
        }
    }

    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            position_id: entity.position_id,
            name: entity.name,
            shirt_number: entity.shirt_number,
            age: entity.age,
            weight: entity.weight,
            height: entity.height,
        }
    }
}

/// Static position reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub id: i32,
    pub name: String,
}

impl Position {
    pub fn into_dto(self) -> PositionDto {
        PositionDto {
            id: self.id,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::position::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// Parameters for inserting a player.
#[derive(Debug, Clone)]
pub struct InsertPlayerParams {
    pub team_id: i32,
    pub position_id: i32,
    pub name: String,
    pub shirt_number: i32,
    pub age: i32,
    pub weight: i32,
    pub height: i32,
}

/// Per-score averages across a player's rated sessions.
///
/// All averages are zero when the player has never been rated.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub player_id: i32,
    pub sessions_rated: u64,
    pub pace: f64,
    pub shooting: f64,
    pub passing: f64,
    pub dribbling: f64,
    pub defending: f64,
    pub physical: f64,
}

impl PlayerStats {
    pub fn into_dto(self) -> PlayerStatsDto {
        PlayerStatsDto {
            player_id: self.player_id,
            sessions_rated: self.sessions_rated,
            pace: self.pace,
            shooting: self.shooting,
            passing: self.passing,
            dribbling: self.dribbling,
            defending: self.defending,
            physical: self.physical,
        }
    }
}
