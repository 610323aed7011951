use super::*;

/// Tests listing without filters.
///
/// Expected: every auction, newest first
#[tokio::test]
async fn returns_all_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = AuctionFactory::new(db)
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::create_auction(db).await?;

    let repo = AuctionRepository::new(db);
    let auctions = repo.find_all(AuctionFilter::default()).await?;

    assert_eq!(auctions.len(), 2);
    assert_eq!(auctions[0].id, newer.id);
    assert_eq!(auctions[1].id, older.id);

    Ok(())
}

/// Tests filtering by status.
///
/// Expected: only auctions in the requested status
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let completed = AuctionFactory::new(db)
        .status(AuctionStatus::Completed)
        .build()
        .await?;
    factory::create_auction(db).await?;

    let repo = AuctionRepository::new(db);
    let auctions = repo
        .find_all(AuctionFilter {
            status: Some(AuctionStatus::Completed),
            ..Default::default()
        })
        .await?;

    assert_eq!(auctions.len(), 1);
    assert_eq!(auctions[0].id, completed.id);

    Ok(())
}

/// Tests combining category (exact) and product name (substring) filters.
///
/// Expected: only the auction matching both
#[tokio::test]
async fn filters_by_category_and_product_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let camera = AuctionFactory::new(db)
        .product_name("Vintage Camera")
        .category("Photography")
        .build()
        .await?;
    AuctionFactory::new(db)
        .product_name("Camera Bag")
        .category("Accessories")
        .build()
        .await?;
    AuctionFactory::new(db)
        .product_name("Tripod")
        .category("Photography")
        .build()
        .await?;

    let repo = AuctionRepository::new(db);
    let auctions = repo
        .find_all(AuctionFilter {
            status: None,
            category: Some("Photography".to_string()),
            product_name: Some("Camera".to_string()),
        })
        .await?;

    assert_eq!(auctions.len(), 1);
    assert_eq!(auctions[0].id, camera.id);

    Ok(())
}
