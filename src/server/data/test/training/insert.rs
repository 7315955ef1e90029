use super::*;

/// Tests that a new session lands in the created state.
///
/// Expected: inactive, both timestamps null
#[tokio::test]
async fn inserts_session_in_created_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, user.id).await?;

    let repo = TrainingRepository::new(db);
    let session = repo.insert(team.id, "Tuesday drills".to_string()).await?;

    assert_eq!(session.team_id, team.id);
    assert_eq!(session.name, "Tuesday drills");
    assert!(!session.active);
    assert!(session.started_at.is_none());
    assert!(session.ended_at.is_none());

    Ok(())
}

/// Tests listing sessions by team in id order.
#[tokio::test]
async fn finds_sessions_by_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, user.id).await?;
    let other_team = factory::team::create_team(db, user.id).await?;

    let first = factory::training_session::create_training_session(db, team.id).await?;
    let second = factory::training_session::create_training_session(db, team.id).await?;
    factory::training_session::create_training_session(db, other_team.id).await?;

    let repo = TrainingRepository::new(db);
    let sessions = repo.find_by_team(team.id).await?;

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].id, first.id);
    assert_eq!(sessions[1].id, second.id);

    Ok(())
}
