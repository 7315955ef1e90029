use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingSession::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainingSession::Id))
                    .col(integer(TrainingSession::TeamId))
                    .col(string(TrainingSession::Name))
                    .col(boolean(TrainingSession::Active).default(false))
                    .col(timestamp_null(TrainingSession::StartedAt))
                    .col(timestamp_null(TrainingSession::EndedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_session_team_id")
                            .from(TrainingSession::Table, TrainingSession::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainingSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainingSession {
    Table,
    Id,
    TeamId,
    Name,
    Active,
    StartedAt,
    EndedAt,
}
