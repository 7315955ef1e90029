use super::*;

/// Tests that only the requesting user's teams are returned, oldest first.
#[tokio::test]
async fn returns_only_own_teams_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let first = factory::team::create_team(db, owner.id).await?;
    let second = factory::team::create_team(db, owner.id).await?;
    factory::team::create_team(db, other.id).await?;

    let repo = TeamRepository::new(db);
    let teams = repo.find_by_user(owner.id).await?;

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].id, first.id);
    assert_eq!(teams[1].id, second.id);

    Ok(())
}

/// Tests that a user with no teams gets an empty list.
#[tokio::test]
async fn returns_empty_for_teamless_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let teams = TeamRepository::new(db).find_by_user(user.id).await?;

    assert!(teams.is_empty());

    Ok(())
}
