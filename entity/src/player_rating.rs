//! Per-player training session ratings.
//!
//! Six 0-10 scores written at finalize time, one row per enrolled player.
//! Column order carries the fixed semantic order of the scores; for
//! goalkeepers the same columns read jump/save/pass/reflexes/reaction/
//! positioning.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player_rating")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub session_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub player_id: i32,
    pub pace: i32,
    pub shooting: i32,
    pub passing: i32,
    pub dribbling: i32,
    pub defending: i32,
    pub physical: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::training_session::Entity",
        from = "Column::SessionId",
        to = "super::training_session::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TrainingSession,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::training_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingSession.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
