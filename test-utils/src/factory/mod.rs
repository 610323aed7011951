//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let auction = factory::create_auction(&db).await?;
//! let bid = factory::create_bid(&db, &user.id, &auction.id, 100.0).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::auction::AuctionStatus;
//! use test_utils::factory::auction::AuctionFactory;
//!
//! let expired = AuctionFactory::new(&db)
//!     .created_at(Utc::now() - Duration::hours(25))
//!     .build()
//!     .await?;
//!
//! let closed = AuctionFactory::new(&db)
//!     .status(AuctionStatus::Completed)
//!     .build()
//!     .await?;
//! ```

pub mod auction;
pub mod bid;
pub mod helpers;
pub mod user;

pub use auction::create_auction;
pub use bid::create_bid;
pub use user::create_user;
