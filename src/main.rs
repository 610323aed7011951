mod model;
mod server;

use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    data::auction::SeaOrmAuctionStore,
    error::AppError,
    scheduler::{auction_expiry::AuctionExpiryReconciler, lifecycle::AuctionExpiryScheduler},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let reconciler = AuctionExpiryReconciler::new(
        Arc::new(SeaOrmAuctionStore::new(db.clone())),
        config.auction_duration,
    );
    let scheduler = AuctionExpiryScheduler::new(reconciler, config.sweep_interval);
    scheduler.start()?;

    let app = server::router::router().with_state(AppState::new(db, config.auction_duration));

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    scheduler.stop().await?;

    served?;

    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
