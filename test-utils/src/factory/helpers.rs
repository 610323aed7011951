//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique, human-readable names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh UUID v4 string for use as a primary key.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates a user and an active auction with one bid from that user.
///
/// # Arguments
/// - `db` - Database connection
/// - `amount` - Amount of the bid
///
/// # Returns
/// - `Ok((user, auction, bid))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_auction_with_bid(
    db: &DatabaseConnection,
    amount: f64,
) -> Result<
    (
        entity::user::Model,
        entity::auction::Model,
        entity::bid::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let auction = crate::factory::auction::create_auction(db).await?;
    let bid = crate::factory::bid::create_bid(db, &user.id, &auction.id, amount).await?;

    Ok((user, auction, bid))
}
