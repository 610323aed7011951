use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::bid::{Bid, CreateBidParams};

pub struct BidRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BidRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new bid stamped with the current time
    ///
    /// Acceptance rules (auction open, user exists) are enforced by the service layer.
    ///
    /// # Returns
    /// - `Ok(Bid)`: The created bid
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateBidParams) -> Result<Bid, DbErr> {
        let entity = entity::bid::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(params.user_id),
            auction_id: ActiveValue::Set(params.auction_id),
            amount: ActiveValue::Set(params.amount),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Bid::from_entity(entity))
    }

    /// Gets all bids for an auction, oldest first
    pub async fn get_by_auction_id(&self, auction_id: &str) -> Result<Vec<Bid>, DbErr> {
        let entities = entity::prelude::Bid::find()
            .filter(entity::bid::Column::AuctionId.eq(auction_id))
            .order_by_asc(entity::bid::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Bid::from_entity).collect())
    }

    /// Gets the winning bid for an auction
    ///
    /// Highest amount wins; among equal amounts the earliest bid wins.
    ///
    /// # Returns
    /// - `Ok(Some(Bid))`: The highest bid
    /// - `Ok(None)`: The auction has no bids
    /// - `Err(DbErr)`: Database error
    pub async fn get_highest_by_auction_id(&self, auction_id: &str) -> Result<Option<Bid>, DbErr> {
        let entity = entity::prelude::Bid::find()
            .filter(entity::bid::Column::AuctionId.eq(auction_id))
            .order_by_desc(entity::bid::Column::Amount)
            .order_by_asc(entity::bid::Column::CreatedAt)
            .one(self.db)
            .await?;

        Ok(entity.map(Bid::from_entity))
    }
}
