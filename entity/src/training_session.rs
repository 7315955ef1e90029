//! Training session entity.
//!
//! Lifecycle: created inactive with both timestamps null, started (roster
//! enrolled, `active` set, `started_at` stamped), finalized (ratings written,
//! `active` cleared, `ended_at` stamped). Finalized sessions are terminal.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "training_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    pub name: String,
    pub active: bool,
    pub started_at: Option<DateTimeUtc>,
    pub ended_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team,
    #[sea_orm(has_many = "super::session_player::Entity")]
    SessionPlayer,
    #[sea_orm(has_many = "super::player_rating::Entity")]
    PlayerRating,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::session_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionPlayer.def()
    }
}

impl Related<super::player_rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerRating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
