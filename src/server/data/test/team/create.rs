use super::*;

/// Tests creating a team owned by an existing user.
///
/// Expected: Ok with team created and owner recorded
#[tokio::test]
async fn creates_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .insert(CreateTeamParams {
            user_id: user.id,
            name: "First Team".to_string(),
        })
        .await?;

    assert_eq!(team.user_id, user.id);
    assert_eq!(team.name, "First Team");

    Ok(())
}

/// Tests finding a team by id.
///
/// Expected: Some for an existing id, None otherwise
#[tokio::test]
async fn finds_team_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let created = factory::team::create_team(db, user.id).await?;

    let repo = TeamRepository::new(db);

    let found = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.user_id, user.id);

    assert!(repo.find_by_id(999999).await?.is_none());

    Ok(())
}
