use super::*;

/// Tests finding an existing user.
///
/// Expected: Ok(Some(User)) with matching name
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).name("Alice").build().await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(&user.id).await?.unwrap();

    assert_eq!(found.id, user.id);
    assert_eq!(found.name, "Alice");

    Ok(())
}

/// Tests looking up an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo
        .find_by_id("00000000-0000-4000-8000-000000000000")
        .await?;

    assert!(found.is_none());

    Ok(())
}
