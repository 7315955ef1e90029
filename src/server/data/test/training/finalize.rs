use super::*;

/// Tests that finalizing persists rating rows and the state transition.
///
/// Expected: one rating row per player, active cleared, ended_at stamped
#[tokio::test]
async fn finalize_records_ratings_and_deactivates() -> Result<(), DbErr> {
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
    repo.start(session.id, &ids).await?;

    let scores = Scores {
        pace: 7,
        shooting: 6,
        passing: 8,
        dribbling: 5,
        defending: 9,
        physical: 7,
    };
    let ratings: Vec<(i32, Scores)> = ids.iter().map(|id| (*id, scores)).collect();

    let updated = repo.finalize(session.id, &ratings).await?;

    assert!(!updated.active);
    assert!(updated.started_at.is_some());
    assert!(updated.ended_at.is_some());

    let recorded = repo.ratings_for_session(session.id).await?;
    assert_eq!(recorded.len(), 2);
    assert!(recorded.iter().all(|r| r.scores == scores));
    assert!(recorded.iter().all(|r| !r.player_name.is_empty()));

    Ok(())
}

/// Tests aggregating a player's ratings across sessions.
#[tokio::test]
async fn collects_ratings_across_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team, _) = factory::helpers::create_session_with_dependencies(db).await?;
    let players = factory::helpers::create_players_for_team(db, team.id, 1).await?;
    let player_id = players[0].id;

    let repo = TrainingRepository::new(db);

    for pace in [4, 8] {
        let session =
            factory::training_session::create_training_session(db, team.id).await?;
        repo.start(session.id, &[player_id]).await?;
        repo.finalize(
            session.id,
            &[(
                player_id,
                Scores {
                    pace,
                    shooting: 5,
                    passing: 5,
                    dribbling: 5,
                    defending: 5,
                    physical: 5,
                },
            )],
        )
        .await?;
    }

    let ratings = repo.ratings_for_player(player_id).await?;

    assert_eq!(ratings.len(), 2);
    let mut paces: Vec<i32> = ratings.iter().map(|s| s.pace).collect();
    paces.sort_unstable();
    assert_eq!(paces, vec![4, 8]);

    Ok(())
}
