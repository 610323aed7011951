//! Auction data repository and the store contract used by the expiry reconciler.
//!
//! `AuctionRepository` follows the per-request repository pattern used across the data
//! layer. `AuctionStore` is the narrow, owned interface the background reconciler holds
//! for the lifetime of the process; `SeaOrmAuctionStore` implements it on top of the
//! repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::store::StoreError,
    model::auction::{Auction, AuctionFilter, AuctionStatus, CreateAuctionParams},
};

pub struct AuctionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuctionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new Active auction stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(Auction)`: The created auction
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateAuctionParams) -> Result<Auction, DbErr> {
        let entity = entity::auction::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            product_name: ActiveValue::Set(params.product_name),
            category: ActiveValue::Set(params.category),
            description: ActiveValue::Set(params.description),
            condition: ActiveValue::Set(params.condition),
            status: ActiveValue::Set(AuctionStatus::Active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Auction::from_entity(entity))
    }

    /// Gets an auction by ID
    ///
    /// # Returns
    /// - `Ok(Some(Auction))`: The auction if found
    /// - `Ok(None)`: No auction with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Auction>, DbErr> {
        let entity = entity::prelude::Auction::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Auction::from_entity))
    }

    /// Lists auctions matching `filter`, newest first.
    pub async fn find_all(&self, filter: AuctionFilter) -> Result<Vec<Auction>, DbErr> {
        let mut query = entity::prelude::Auction::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::auction::Column::Status.eq(status));
        }
        if let Some(category) = filter.category {
            query = query.filter(entity::auction::Column::Category.eq(category));
        }
        if let Some(product_name) = filter.product_name {
            query = query.filter(entity::auction::Column::ProductName.contains(product_name));
        }

        let entities = query
            .order_by_desc(entity::auction::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Auction::from_entity).collect())
    }

    /// Marks every Active auction created strictly before `cutoff` as Completed.
    ///
    /// Runs as a single UPDATE statement so concurrent readers see each auction either
    /// before or after the transition, never in between. An auction created exactly at
    /// `cutoff` is left Active.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of auctions transitioned, zero when nothing matched
    /// - `Err(DbErr)`: Database error
    pub async fn transition_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Auction::update_many()
            .set(entity::auction::ActiveModel {
                status: ActiveValue::Set(AuctionStatus::Completed),
                ..Default::default()
            })
            .filter(entity::auction::Column::Status.eq(AuctionStatus::Active))
            .filter(entity::auction::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Persistent auction collection as seen by the expiry reconciler.
///
/// Any backend is substitutable as long as `transition_expired` is a single atomic
/// conditional bulk update.
#[async_trait]
pub trait AuctionStore: Send + Sync {
    /// Persists a new Active auction with `created_at` set to now.
    async fn insert(&self, params: CreateAuctionParams) -> Result<Auction, StoreError>;

    /// Point lookup. Fails with `StoreError::NotFound` when absent.
    async fn find_by_id(&self, id: &str) -> Result<Auction, StoreError>;

    /// Moves every Active auction with `created_at < cutoff` to Completed and returns how
    /// many changed.
    async fn transition_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, StoreError>;
}

/// `AuctionStore` backed by the application's SeaORM connection pool.
#[derive(Clone)]
pub struct SeaOrmAuctionStore {
    db: DatabaseConnection,
}

impl SeaOrmAuctionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuctionStore for SeaOrmAuctionStore {
    async fn insert(&self, params: CreateAuctionParams) -> Result<Auction, StoreError> {
        Ok(AuctionRepository::new(&self.db).create(params).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Auction, StoreError> {
        AuctionRepository::new(&self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn transition_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, StoreError> {
        Ok(AuctionRepository::new(&self.db)
            .transition_expired(cutoff)
            .await?)
    }
}
