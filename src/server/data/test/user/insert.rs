use super::*;

/// Tests inserting a new user account.
///
/// Verifies the repository persists all fields and strips the password hash
/// from the returned domain model.
///
/// Expected: Ok with user created
#[tokio::test]
async fn inserts_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .insert(InsertUserParams {
            name: "coach".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            phone: "600111222".to_string(),
            email: "coach@example.com".to_string(),
        })
        .await?;

    assert_eq!(user.name, "coach");
    assert_eq!(user.phone, "600111222");
    assert_eq!(user.email, "coach@example.com");

    Ok(())
}

/// Tests the unique constraint on the login name.
///
/// Expected: Err(DbErr) on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let params = InsertUserParams {
        name: "coach".to_string(),
        password_hash: "$argon2id$stub".to_string(),
        phone: "600111222".to_string(),
        email: "coach@example.com".to_string(),
    };
    repo.insert(params.clone()).await?;

    let second = repo
        .insert(InsertUserParams {
            phone: "600333444".to_string(),
            email: "other@example.com".to_string(),
            ..params
        })
        .await;

    assert!(second.is_err());

    Ok(())
}

/// Tests credential lookup by name for the login flow.
///
/// Verifies the stored password hash is returned alongside the user, and
/// that an unknown name yields None.
#[tokio::test]
async fn finds_credentials_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .name("coach")
        .password_hash("$argon2id$stored")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let credentials = repo.find_credentials_by_name("coach").await?.unwrap();
    assert_eq!(credentials.user.id, created.id);
    assert_eq!(credentials.password_hash, "$argon2id$stored");

    assert!(repo.find_credentials_by_name("nobody").await?.is_none());

    Ok(())
}
