//! Bid service for business logic.
//!
//! Owns the acceptance rules for new bids. An auction accepts bids only while it is
//! Active and inside its window; the window is checked against the clock directly so a
//! bid placed between expiry and the next sweep is still refused.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::server::{
    data::{auction::AuctionRepository, bid::BidRepository, user::UserRepository},
    error::{store::StoreError, AppError},
    model::bid::{Bid, CreateBidParams},
};

pub struct BidService<'a> {
    db: &'a DatabaseConnection,
    auction_duration: Duration,
}

impl<'a> BidService<'a> {
    /// Creates a new BidService.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `auction_duration` - Active window of every auction
    pub fn new(db: &'a DatabaseConnection, auction_duration: Duration) -> Self {
        Self {
            db,
            auction_duration,
        }
    }

    /// Places a bid on an open auction.
    ///
    /// # Returns
    /// - `Ok(Bid)` - The accepted bid
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::StoreErr(StoreError::NotFound))` - Auction does not exist
    /// - `Err(AppError::BadRequest)` - Auction is closed or past its window
    pub async fn create(&self, params: CreateBidParams) -> Result<Bid, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(&params.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                params.user_id
            )));
        }

        let auction = AuctionRepository::new(self.db)
            .get_by_id(&params.auction_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(params.auction_id.clone()))?;

        if !auction.is_open_at(Utc::now(), self.auction_duration) {
            return Err(AppError::BadRequest(format!(
                "Auction {} is closed",
                auction.id
            )));
        }

        let bid = BidRepository::new(self.db).create(params).await?;

        tracing::debug!("Accepted bid {} on auction {}", bid.id, bid.auction_id);

        Ok(bid)
    }

    /// Lists bids on an auction in placement order
    pub async fn get_by_auction(&self, auction_id: &str) -> Result<Vec<Bid>, AppError> {
        Ok(BidRepository::new(self.db)
            .get_by_auction_id(auction_id)
            .await?)
    }
}
