use super::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests deleting a team and cascading its players.
#[tokio::test]
async fn deletes_team_and_cascades_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team, _, player) = factory::helpers::create_player_with_dependencies(db).await?;

    let repo = TeamRepository::new(db);
    repo.delete(team.id).await?;

    assert!(repo.find_by_id(team.id).await?.is_none());

    let remaining = entity::prelude::Player::find()
        .filter(entity::player::Column::Id.eq(player.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    Ok(())
}
