use super::*;

/// Tests listing bids for one auction in placement order.
///
/// Expected: only that auction's bids, oldest first
#[tokio::test]
async fn returns_bids_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let auction = factory::create_auction(db).await?;
    let other = factory::create_auction(db).await?;

    let now = Utc::now();
    let second = BidFactory::new(db, &user.id, &auction.id)
        .amount(20.0)
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;
    let first = BidFactory::new(db, &user.id, &auction.id)
        .amount(10.0)
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;
    factory::create_bid(db, &user.id, &other.id, 99.0).await?;

    let repo = BidRepository::new(db);
    let bids = repo.get_by_auction_id(&auction.id).await?;

    assert_eq!(bids.len(), 2);
    assert_eq!(bids[0].id, first.id);
    assert_eq!(bids[1].id, second.id);

    Ok(())
}

/// Tests listing bids for an auction nobody has bid on.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_bids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let auction = factory::create_auction(db).await?;

    let repo = BidRepository::new(db);
    let bids = repo.get_by_auction_id(&auction.id).await?;

    assert!(bids.is_empty());

    Ok(())
}
