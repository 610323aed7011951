//! Bid factory for creating test bid entities.

use crate::factory::helpers::new_uuid;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bids with customizable fields.
///
/// The referenced user and auction must already exist.
pub struct BidFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    user_id: String,
    auction_id: String,
    amount: f64,
    created_at: DateTime<Utc>,
}

impl<'a> BidFactory<'a> {
    /// Creates a new BidFactory with a random ID, an amount of `100.0` and `created_at`
    /// set to now.
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: impl Into<String>,
        auction_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            id: new_uuid(),
            user_id: user_id.into(),
            auction_id: auction_id.into(),
            amount: 100.0,
            created_at: Utc::now(),
        }
    }

    /// Sets the bid amount.
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the bid entity into the database.
    pub async fn build(self) -> Result<entity::bid::Model, DbErr> {
        entity::bid::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            auction_id: ActiveValue::Set(self.auction_id),
            amount: ActiveValue::Set(self.amount),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bid of `amount` from `user_id` on `auction_id`.
pub async fn create_bid(
    db: &DatabaseConnection,
    user_id: &str,
    auction_id: &str,
    amount: f64,
) -> Result<entity::bid::Model, DbErr> {
    BidFactory::new(db, user_id, auction_id)
        .amount(amount)
        .build()
        .await
}
