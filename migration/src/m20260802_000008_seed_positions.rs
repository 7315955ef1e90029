use sea_orm_migration::prelude::*;

use super::m20260801_000003_create_position_table::Position;

/// Seeds the static position reference data the player endpoints rely on.
#[derive(DeriveMigrationName)]
pub struct Migration;

const POSITIONS: [&str; 4] = ["Goalkeeper", "Defender", "Midfielder", "Forward"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Position::Table)
            .columns([Position::Name])
            .to_owned();

        for name in POSITIONS {
            insert.values_panic([name.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(Position::Table).to_owned())
            .await
    }
}
