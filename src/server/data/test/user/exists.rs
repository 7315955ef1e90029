use super::*;

/// Tests the registration availability probes.
///
/// Verifies name, phone and email probes report true for registered values
/// and false otherwise.
#[tokio::test]
async fn reports_registered_values() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("coach")
        .phone("600111222")
        .email("coach@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.name_exists("coach").await?);
    assert!(!repo.name_exists("other").await?);

    assert!(repo.phone_exists("600111222").await?);
    assert!(!repo.phone_exists("600999999").await?);

    assert!(repo.email_exists("coach@example.com").await?);
    assert!(!repo.email_exists("other@example.com").await?);

    Ok(())
}
