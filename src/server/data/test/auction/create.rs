use super::*;

/// Tests creating an auction.
///
/// Verifies that the repository assigns a UUID, starts the auction Active and stamps
/// `created_at` with the current time.
///
/// Expected: Ok(Auction) with status Active
#[tokio::test]
async fn creates_active_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let repo = AuctionRepository::new(db);
    let auction = repo.create(create_params("Laptop")).await?;

    assert!(uuid::Uuid::parse_str(&auction.id).is_ok());
    assert_eq!(auction.product_name, "Laptop");
    assert_eq!(auction.condition, ProductCondition::Used);
    assert_eq!(auction.status, AuctionStatus::Active);
    assert!(auction.created_at >= before);
    assert!(auction.created_at <= Utc::now());

    Ok(())
}

/// Tests that each created auction gets a distinct ID.
///
/// Expected: Ok with two different IDs
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuctionRepository::new(db);
    let first = repo.create(create_params("Laptop")).await?;
    let second = repo.create(create_params("Laptop")).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests creating an auction when the table is missing.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuctionRepository::new(db);
    let result = repo.create(create_params("Laptop")).await;

    assert!(result.is_err());

    Ok(())
}
