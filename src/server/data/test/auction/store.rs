use super::*;

/// Tests the store round trip: insert then point lookup.
///
/// Expected: the inserted auction comes back unchanged
#[tokio::test]
async fn inserts_and_finds_auction() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let store = SeaOrmAuctionStore::new(db.clone());
    let inserted = store.insert(create_params("Headphones")).await?;
    let found = store.find_by_id(&inserted.id).await?;

    assert_eq!(found, inserted);
    assert_eq!(found.status, AuctionStatus::Active);

    Ok(())
}

/// Tests that a missing auction surfaces as `StoreError::NotFound`.
///
/// Expected: Err(StoreError::NotFound)
#[tokio::test]
async fn reports_missing_auction_as_not_found() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let store = SeaOrmAuctionStore::new(db.clone());
    let result = store.find_by_id("00000000-0000-4000-8000-000000000000").await;

    assert!(matches!(result, Err(StoreError::NotFound(_))));

    Ok(())
}

/// Tests that database failures surface as `StoreError::Storage`.
///
/// Expected: Err(StoreError::Storage) when the table does not exist
#[tokio::test]
async fn reports_database_failure_as_storage_error() -> Result<(), StoreError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let store = SeaOrmAuctionStore::new(db.clone());
    let result = store.transition_expired(Utc::now()).await;

    assert!(matches!(result, Err(StoreError::Storage(_))));

    Ok(())
}
