use thiserror::Error;

/// Failures surfaced by an [`AuctionStore`](crate::server::data::auction::AuctionStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// No auction exists with the requested identifier.
    ///
    /// Results in a 404 Not Found when it reaches an HTTP handler.
    #[error("Auction {0} not found")]
    NotFound(String),

    /// The underlying database rejected or failed the operation.
    ///
    /// Inside the expiry sweep this only skips the current cycle; on request paths it
    /// results in a 500 Internal Server Error.
    #[error(transparent)]
    Storage(#[from] sea_orm::DbErr),
}
