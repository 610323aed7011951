use super::*;

/// Tests placing a bid for an existing user and auction.
///
/// Expected: Ok(Bid) with the given amount and a fresh timestamp
#[tokio::test]
async fn creates_bid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let auction = factory::create_auction(db).await?;

    let before = Utc::now();
    let repo = BidRepository::new(db);
    let bid = repo
        .create(CreateBidParams {
            user_id: user.id.clone(),
            auction_id: auction.id.clone(),
            amount: 42.5,
        })
        .await?;

    assert!(uuid::Uuid::parse_str(&bid.id).is_ok());
    assert_eq!(bid.user_id, user.id);
    assert_eq!(bid.auction_id, auction.id);
    assert_eq!(bid.amount, 42.5);
    assert!(bid.created_at >= before);

    Ok(())
}

/// Tests that a bid referencing a missing auction violates the foreign key.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_auction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BidRepository::new(db);
    let result = repo
        .create(CreateBidParams {
            user_id: user.id,
            auction_id: "00000000-0000-4000-8000-000000000000".to_string(),
            amount: 1.0,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
