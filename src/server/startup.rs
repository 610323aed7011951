use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

/// Opens the auction database and brings its schema up to date.
///
/// Applies every pending migration (users, auctions, bids and the
/// `idx_auction_status_created_at` index the expiry sweep filters on) before returning, so
/// the store and the scheduler can assume the tables exist.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pool with the auction schema applied
/// - `Err(AppError::DbErr)` - Connection or migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("Auction schema migrated");

    Ok(db)
}
