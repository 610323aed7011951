//! In-memory `AuctionStore` doubles for exercising the reconciler without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::{
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};
use tokio::sync::Notify;

use crate::server::{
    data::auction::AuctionStore,
    error::store::StoreError,
    model::auction::{Auction, CreateAuctionParams},
};

fn unsupported() -> StoreError {
    StoreError::Storage(DbErr::Custom("not supported by fake store".to_string()))
}

/// Records every cutoff it is asked to sweep and matches nothing.
#[derive(Default)]
pub struct RecordingStore {
    cutoffs: Mutex<Vec<DateTime<Utc>>>,
}

impl RecordingStore {
    pub fn cutoffs(&self) -> Vec<DateTime<Utc>> {
        self.cutoffs.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.cutoffs.lock().unwrap().len()
    }
}

#[async_trait]
impl AuctionStore for RecordingStore {
    async fn insert(&self, _params: CreateAuctionParams) -> Result<Auction, StoreError> {
        Err(unsupported())
    }

    async fn find_by_id(&self, id: &str) -> Result<Auction, StoreError> {
        Err(StoreError::NotFound(id.to_string()))
    }

    async fn transition_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, StoreError> {
        self.cutoffs.lock().unwrap().push(cutoff);
        Ok(0)
    }
}

/// Fails every sweep with a storage error.
#[derive(Default)]
pub struct FailingStore {
    calls: AtomicUsize,
}

impl FailingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuctionStore for FailingStore {
    async fn insert(&self, _params: CreateAuctionParams) -> Result<Auction, StoreError> {
        Err(unsupported())
    }

    async fn find_by_id(&self, id: &str) -> Result<Auction, StoreError> {
        Err(StoreError::NotFound(id.to_string()))
    }

    async fn transition_expired(&self, _cutoff: DateTime<Utc>) -> Result<u64, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Storage(DbErr::Custom("database is locked".to_string())))
    }
}

/// Takes `delay` to finish each sweep and reports when one starts and ends.
pub struct SlowStore {
    delay: Duration,
    calls: AtomicUsize,
    finished: AtomicBool,
    pub started: Notify,
}

impl SlowStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicUsize::new(0),
            finished: AtomicBool::new(false),
            started: Notify::new(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuctionStore for SlowStore {
    async fn insert(&self, _params: CreateAuctionParams) -> Result<Auction, StoreError> {
        Err(unsupported())
    }

    async fn find_by_id(&self, id: &str) -> Result<Auction, StoreError> {
        Err(StoreError::NotFound(id.to_string()))
    }

    async fn transition_expired(&self, _cutoff: DateTime<Utc>) -> Result<u64, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.finished.store(false, Ordering::SeqCst);
        self.started.notify_one();
        tokio::time::sleep(self.delay).await;
        self.finished.store(true, Ordering::SeqCst);
        Ok(1)
    }
}
