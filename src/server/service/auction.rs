//! Auction service for business logic.
//!
//! Creation and lookup go through the [`AuctionStore`] contract shared with the expiry
//! reconciler; listing and winner selection read the repositories directly.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        auction::{AuctionRepository, AuctionStore, SeaOrmAuctionStore},
        bid::BidRepository,
    },
    error::AppError,
    model::auction::{Auction, AuctionFilter, AuctionWinner, CreateAuctionParams},
};

pub struct AuctionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuctionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new Active auction
    pub async fn create(&self, params: CreateAuctionParams) -> Result<Auction, AppError> {
        let auction = SeaOrmAuctionStore::new(self.db.clone()).insert(params).await?;

        tracing::debug!("Created auction {}", auction.id);

        Ok(auction)
    }

    /// Gets an auction by ID
    ///
    /// # Returns
    /// - `Ok(Auction)` - The auction
    /// - `Err(AppError::StoreErr(StoreError::NotFound))` - No auction with that ID
    pub async fn get_by_id(&self, id: &str) -> Result<Auction, AppError> {
        Ok(SeaOrmAuctionStore::new(self.db.clone()).find_by_id(id).await?)
    }

    /// Lists auctions matching the filter, newest first
    pub async fn find_all(&self, filter: AuctionFilter) -> Result<Vec<Auction>, AppError> {
        Ok(AuctionRepository::new(self.db).find_all(filter).await?)
    }

    /// Gets an auction together with its winning bid, if any
    pub async fn get_winner(&self, auction_id: &str) -> Result<AuctionWinner, AppError> {
        let auction = self.get_by_id(auction_id).await?;
        let bid = BidRepository::new(self.db)
            .get_highest_by_auction_id(auction_id)
            .await?;

        Ok(AuctionWinner { auction, bid })
    }
}
