pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_team_table;
mod m20260801_000003_create_position_table;
mod m20260801_000004_create_player_table;
mod m20260802_000005_create_training_session_table;
mod m20260802_000006_create_session_player_table;
mod m20260802_000007_create_player_rating_table;
mod m20260802_000008_seed_positions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_team_table::Migration),
            Box::new(m20260801_000003_create_position_table::Migration),
            Box::new(m20260801_000004_create_player_table::Migration),
            Box::new(m20260802_000005_create_training_session_table::Migration),
            Box::new(m20260802_000006_create_session_player_table::Migration),
            Box::new(m20260802_000007_create_player_rating_table::Migration),
            Box::new(m20260802_000008_seed_positions::Migration),
        ]
    }
}
