use super::*;

/// Tests that starting a session persists the enrollment set and the state
/// transition together.
///
/// Expected: one enrollment row per player, active set, started_at stamped
#[tokio::test]
async fn start_enrolls_roster_and_activates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team, session) = factory::helpers::create_session_with_dependencies(db).await?;
    let players = factory::helpers::create_players_for_team(db, team.id, 2).await?;

    let repo = TrainingRepository::new(db);
    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();

    let updated = repo.start(session.id, &ids).await?;

    assert!(updated.active);
    assert!(updated.started_at.is_some());
    assert!(updated.ended_at.is_none());

    let enrolled = repo.players_for_session(session.id).await?;
    assert_eq!(enrolled.len(), 2);
    let mut enrolled_ids: Vec<i32> = enrolled.iter().map(|p| p.id).collect();
    enrolled_ids.sort_unstable();
    let mut expected = ids.clone();
    expected.sort_unstable();
    assert_eq!(enrolled_ids, expected);

    Ok(())
}

/// Tests that an empty roster still transitions the session.
///
/// The start operation accepts an empty id list; the enrollment set is just
/// empty.
#[tokio::test]
async fn start_with_empty_roster_activates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, session) = factory::helpers::create_session_with_dependencies(db).await?;

    let repo = TrainingRepository::new(db);
    let updated = repo.start(session.id, &[]).await?;

    assert!(updated.active);
    assert!(repo.players_for_session(session.id).await?.is_empty());

    Ok(())
}
