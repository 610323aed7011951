//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's state
//! extraction.

use sea_orm::DatabaseConnection;
use std::time::Duration;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// duration is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Active window of every auction, used to refuse bids on auctions the expiry sweep
    /// has not closed yet.
    pub auction_duration: Duration,
}

impl AppState {
    pub fn new(db: DatabaseConnection, auction_duration: Duration) -> Self {
        Self {
            db,
            auction_duration,
        }
    }
}
