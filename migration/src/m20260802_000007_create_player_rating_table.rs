use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000004_create_player_table::Player,
    m20260802_000005_create_training_session_table::TrainingSession,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerRating::Table)
                    .if_not_exists()
                    .col(integer(PlayerRating::SessionId))
                    .col(integer(PlayerRating::PlayerId))
                    .col(integer(PlayerRating::Pace))
                    .col(integer(PlayerRating::Shooting))
                    .col(integer(PlayerRating::Passing))
                    .col(integer(PlayerRating::Dribbling))
                    .col(integer(PlayerRating::Defending))
                    .col(integer(PlayerRating::Physical))
                    .primary_key(
                        Index::create()
                            .col(PlayerRating::SessionId)
                            .col(PlayerRating::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_rating_session_id")
                            .from(PlayerRating::Table, PlayerRating::SessionId)
                            .to(TrainingSession::Table, TrainingSession::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_rating_player_id")
                            .from(PlayerRating::Table, PlayerRating::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerRating::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerRating {
    Table,
    SessionId,
    PlayerId,
    Pace,
    Shooting,
    Passing,
    Dribbling,
    Defending,
    Physical,
}
