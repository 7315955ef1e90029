use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000002_create_team_table::Team, m20260801_000003_create_position_table::Position,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(integer(Player::TeamId))
                    .col(integer(Player::PositionId))
                    .col(string(Player::Name))
                    .col(integer(Player::ShirtNumber))
                    .col(integer(Player::Age))
                    .col(integer(Player::Weight))
                    .col(integer(Player::Height))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_team_id")
                            .from(Player::Table, Player::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_position_id")
                            .from(Player::Table, Player::PositionId)
                            .to(Position::Table, Position::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    TeamId,
    PositionId,
    Name,
    ShirtNumber,
    Age,
    Weight,
    Height,
}
