use chrono::{DateTime, TimeDelta, Utc};
use std::{sync::Arc, time::Duration};

use crate::server::{data::auction::AuctionStore, error::store::StoreError};

/// Closes auctions whose active window has elapsed.
///
/// Holds no state between cycles beyond the resolved duration and the store handle;
/// every cycle derives its cutoff from the clock and lets the store do the matching.
#[derive(Clone)]
pub struct AuctionExpiryReconciler {
    store: Arc<dyn AuctionStore>,
    duration: Duration,
}

impl AuctionExpiryReconciler {
    /// Creates a reconciler over `store` for auctions that stay open for `duration`.
    pub fn new(store: Arc<dyn AuctionStore>, duration: Duration) -> Self {
        Self { store, duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Cutoff for a sweep at `now`: auctions created strictly before it are expired.
    ///
    /// Saturates to the earliest representable instant when `now - duration` underflows.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        TimeDelta::from_std(self.duration)
            .ok()
            .and_then(|delta| now.checked_sub_signed(delta))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Transitions every auction expired as of `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of auctions moved to Completed
    /// - `Err(StoreError)` - The store failed; nothing is retried
    pub async fn sweep_at(&self, now: DateTime<Utc>) -> Result<u64, StoreError> {
        self.store.transition_expired(self.cutoff(now)).await
    }

    /// Runs one sweep against the current time.
    ///
    /// Never fails: a store error is logged and the cycle is skipped so the next tick
    /// can try again.
    pub async fn run_sweep_cycle(&self) {
        match self.sweep_at(Utc::now()).await {
            Ok(0) => {}
            Ok(count) => tracing::info!("Closed {} expired auction(s)", count),
            Err(e) => tracing::error!("Auction expiry sweep failed: {}", e),
        }
    }
}
