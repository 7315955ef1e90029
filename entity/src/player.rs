//! Player entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    pub position_id: i32,
    pub name: String,
    pub shirt_number: i32,
    pub age: i32,
    /// Weight in kilograms.
    pub weight: i32,
    /// Height in centimeters.
    pub height: i32,
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
    #[sea_orm(
        belongs_to = "super::position::Entity",
        from = "Column::PositionId",
        to = "super::position::Column::Id",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    Position,
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

impl Related<super::position::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Position.def()
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
