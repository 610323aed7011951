use super::*;

/// Tests retrieving an existing auction by ID.
///
/// Expected: Ok(Some(Auction))
#[tokio::test]
async fn returns_existing_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auction = factory::create_auction(db).await?;

    let repo = AuctionRepository::new(db);
    let result = repo.get_by_id(&auction.id).await?;

    let found = result.unwrap();
    assert_eq!(found.id, auction.id);
    assert_eq!(found.product_name, auction.product_name);
    assert_eq!(found.created_at, auction.created_at);

    Ok(())
}

/// Tests retrieving an auction that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuctionRepository::new(db);
    let result = repo
        .get_by_id("00000000-0000-4000-8000-000000000000")
        .await?;

    assert!(result.is_none());

    Ok(())
}
