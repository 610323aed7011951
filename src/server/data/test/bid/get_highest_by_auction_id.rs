use super::*;

/// Tests that the highest amount wins.
///
/// Expected: Ok(Some(bid)) with the largest amount
#[tokio::test]
async fn returns_highest_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let auction = factory::create_auction(db).await?;
    factory::create_bid(db, &user.id, &auction.id, 10.0).await?;
    let highest = factory::create_bid(db, &user.id, &auction.id, 30.0).await?;
    factory::create_bid(db, &user.id, &auction.id, 20.0).await?;

    let repo = BidRepository::new(db);
    let winner = repo.get_highest_by_auction_id(&auction.id).await?;

    assert_eq!(winner.unwrap().id, highest.id);

    Ok(())
}

/// Tests that among equal amounts the earliest bid wins.
///
/// Expected: Ok(Some(bid)) placed first
#[tokio::test]
async fn breaks_ties_by_earliest_bid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let early_user = factory::create_user(db).await?;
    let late_user = factory::create_user(db).await?;
    let auction = factory::create_auction(db).await?;

    let now = Utc::now();
    BidFactory::new(db, &late_user.id, &auction.id)
        .amount(50.0)
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;
    let early = BidFactory::new(db, &early_user.id, &auction.id)
        .amount(50.0)
        .created_at(now - Duration::minutes(10))
        .build()
        .await?;

    let repo = BidRepository::new(db);
    let winner = repo.get_highest_by_auction_id(&auction.id).await?.unwrap();

    assert_eq!(winner.id, early.id);
    assert_eq!(winner.user_id, early_user.id);

    Ok(())
}

/// Tests an auction without bids.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_bids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auction = factory::create_auction(db).await?;

    let repo = BidRepository::new(db);
    let winner = repo.get_highest_by_auction_id(&auction.id).await?;

    assert!(winner.is_none());

    Ok(())
}
