use super::*;

/// Tests inserting a player with valid team and position references.
///
/// Expected: Ok with player created
#[tokio::test]
async fn inserts_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, user.id).await?;
    let position = factory::position::create_position(db).await?;

    let repo = PlayerRepository::new(db);
    let player = repo
        .insert(InsertPlayerParams {
            team_id: team.id,
            position_id: position.id,
            name: "Striker".to_string(),
            shirt_number: 9,
            age: 23,
            weight: 78,
            height: 183,
        })
        .await?;

    assert_eq!(player.team_id, team.id);
    assert_eq!(player.position_id, position.id);
    assert_eq!(player.shirt_number, 9);

    Ok(())
}

/// Tests the foreign key constraint on team_id.
///
/// Expected: Err(DbErr) for a nonexistent team
#[tokio::test]
async fn fails_for_nonexistent_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let position = factory::position::create_position(db).await?;

    let repo = PlayerRepository::new(db);
    let result = repo
        .insert(InsertPlayerParams {
            team_id: 999999,
            position_id: position.id,
            name: "Orphan".to_string(),
            shirt_number: 1,
            age: 20,
            weight: 70,
            height: 175,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
