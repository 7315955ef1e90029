use super::*;

/// Tests that find_by_ids silently skips missing ids.
///
/// Callers compare lengths to detect missing players; the repository itself
/// returns whatever resolved.
#[tokio::test]
async fn find_by_ids_skips_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, user.id).await?;
    let players = factory::helpers::create_players_for_team(db, team.id, 2).await?;

    let repo = PlayerRepository::new(db);
    let found = repo
        .find_by_ids(&[players[0].id, players[1].id, 999999])
        .await?;

    assert_eq!(found.len(), 2);

    Ok(())
}

/// Tests listing players by team.
#[tokio::test]
async fn finds_players_by_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, user.id).await?;
    let other_team = factory::team::create_team(db, user.id).await?;

    factory::helpers::create_players_for_team(db, team.id, 3).await?;
    factory::helpers::create_players_for_team(db, other_team.id, 1).await?;

    let repo = PlayerRepository::new(db);

    assert_eq!(repo.find_by_team(team.id).await?.len(), 3);
    assert_eq!(repo.find_by_team(other_team.id).await?.len(), 1);

    Ok(())
}

/// Tests listing players across every team a user owns.
///
/// The join must exclude players on other users' teams.
#[tokio::test]
async fn finds_players_across_owned_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let team_a = factory::team::create_team(db, owner.id).await?;
    let team_b = factory::team::create_team(db, owner.id).await?;
    let foreign = factory::team::create_team(db, stranger.id).await?;

    factory::helpers::create_players_for_team(db, team_a.id, 2).await?;
    factory::helpers::create_players_for_team(db, team_b.id, 1).await?;
    factory::helpers::create_players_for_team(db, foreign.id, 4).await?;

    let repo = PlayerRepository::new(db);
    let players = repo.find_by_user(owner.id).await?;

    assert_eq!(players.len(), 3);
    assert!(players
        .iter()
        .all(|p| p.team_id == team_a.id || p.team_id == team_b.id));

    Ok(())
}
