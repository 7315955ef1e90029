//! Team domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::team::TeamDto;

/// Team owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    /// Owning user.
    pub user_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a team.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub user_id: i32,
    pub name: String,
}
