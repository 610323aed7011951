//! Auction factory for creating test auction entities.
//!
//! Unlike the production store, the factory lets tests pick `created_at` and `status`
//! freely so that expired, fresh and already-completed auctions can be seeded directly.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{DateTime, Utc};
use entity::auction::{AuctionStatus, ProductCondition};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test auctions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::auction::AuctionFactory;
///
/// let auction = AuctionFactory::new(&db)
///     .product_name("Vintage Camera")
///     .created_at(Utc::now() - Duration::hours(25))
///     .build()
///     .await?;
/// ```
pub struct AuctionFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    product_name: String,
    category: String,
    description: String,
    condition: ProductCondition,
    status: AuctionStatus,
    created_at: DateTime<Utc>,
}

impl<'a> AuctionFactory<'a> {
    /// Creates a new AuctionFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID v4
    /// - product_name: `"Product {n}"` where n is auto-incremented
    /// - category: `"Electronics"`
    /// - description: `"Test auction description"`
    /// - condition: `New`
    /// - status: `Active`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: new_uuid(),
            product_name: format!("Product {}", next_id()),
            category: "Electronics".to_string(),
            description: "Test auction description".to_string(),
            condition: ProductCondition::New,
            status: AuctionStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Sets the auction ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the product name.
    pub fn product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = product_name.into();
        self
    }

    /// Sets the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the product condition.
    pub fn condition(mut self, condition: ProductCondition) -> Self {
        self.condition = condition;
        self
    }

    /// Sets the lifecycle status.
    pub fn status(mut self, status: AuctionStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the auction entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::auction::Model)` - Created auction entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::auction::Model, DbErr> {
        entity::auction::ActiveModel {
            id: ActiveValue::Set(self.id),
            product_name: ActiveValue::Set(self.product_name),
            category: ActiveValue::Set(self.category),
            description: ActiveValue::Set(self.description),
            condition: ActiveValue::Set(self.condition),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active auction created now.
///
/// Shorthand for `AuctionFactory::new(db).build().await`.
pub async fn create_auction(db: &DatabaseConnection) -> Result<entity::auction::Model, DbErr> {
    AuctionFactory::new(db).build().await
}
