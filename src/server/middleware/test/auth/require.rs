use super::*;

/// Tests a valid bearer token resolving to its database user.
///
/// Verifies the guard decodes the token, re-fetches the account by id and
/// returns current profile data.
///
/// Expected: Ok(User) matching the created account
#[tokio::test]
async fn grants_access_with_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("coach")
        .build()
        .await?;

    let (token, _) = token::issue(user.id, TEST_SECRET)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let state = test_state(db);
    let headers = bearer_headers(&token);

    let guard = AuthGuard::new(&state, &headers);
    let authenticated = guard.require(&[]).await?;

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.name, "coach");

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let state = test_state(db);
    let headers = HeaderMap::new();

    let guard = AuthGuard::new(&state, &headers);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a malformed bearer token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_garbage_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let state = test_state(db);
    let headers = bearer_headers("not.a.jwt");

    let guard = AuthGuard::new(&state, &headers);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a well-signed token whose subject no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_for_vanished_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (token, _) = token::issue(424242, TEST_SECRET)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let state = test_state(db);
    let headers = bearer_headers(&token);

    let guard = AuthGuard::new(&state, &headers);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(424242)))
    ));

    Ok(())
}

/// Tests the ownership permission for the team owner.
///
/// Expected: Ok(User)
#[tokio::test]
async fn team_owner_grants_for_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, user.id).await?;

    let (token, _) = token::issue(user.id, TEST_SECRET)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let state = test_state(db);
    let headers = bearer_headers(&token);

    let guard = AuthGuard::new(&state, &headers);
    let result = guard.require(&[Permission::TeamOwner(team.id)]).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests the ownership permission for a non-owner.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn team_owner_denies_for_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, owner.id).await?;

    let (token, _) = token::issue(stranger.id, TEST_SECRET)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let state = test_state(db);
    let headers = bearer_headers(&token);

    let guard = AuthGuard::new(&state, &headers);
    let result = guard.require(&[Permission::TeamOwner(team.id)]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, stranger.id);
        }
        other => panic!("expected AccessDenied, got {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests that a missing team maps to NotFound, never to an ownership error.
///
/// The existence check always precedes the ownership check.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn team_owner_not_found_for_missing_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Team)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let (token, _) = token::issue(user.id, TEST_SECRET)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let state = test_state(db);
    let headers = bearer_headers(&token);

    let guard = AuthGuard::new(&state, &headers);
    let result = guard.require(&[Permission::TeamOwner(999999)]).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
