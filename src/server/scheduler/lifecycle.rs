//! Owned background task that repeats the expiry sweep on a fixed period.
//!
//! The task is created explicitly by the process bootstrap, never on construction, and
//! is stopped through a one-shot cancellation that waits for any in-flight sweep.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::server::{
    error::scheduler::SchedulerError, scheduler::auction_expiry::AuctionExpiryReconciler,
};

/// Lifecycle of an [`AuctionExpiryScheduler`]. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Created,
    Running,
    Stopped,
}

enum Inner {
    Created,
    Running(JoinHandle<()>),
    /// `started` records whether a task was ever spawned and so must be waited on.
    Stopped { started: bool },
}

pub struct AuctionExpiryScheduler {
    reconciler: Arc<AuctionExpiryReconciler>,
    period: Duration,
    inner: Mutex<Inner>,
    cancel: CancellationToken,
    /// Cancelled by the background task on exit, including on panic.
    finished: CancellationToken,
}

impl AuctionExpiryScheduler {
    /// Creates a scheduler in the `Created` state. Nothing runs until [`Self::start`].
    ///
    /// A zero `period` is clamped to one millisecond.
    pub fn new(reconciler: AuctionExpiryReconciler, period: Duration) -> Self {
        Self {
            reconciler: Arc::new(reconciler),
            period: period.max(Duration::from_millis(1)),
            inner: Mutex::new(Inner::Created),
            cancel: CancellationToken::new(),
            finished: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> SchedulerState {
        match *self.lock_inner() {
            Inner::Created => SchedulerState::Created,
            Inner::Running(_) => SchedulerState::Running,
            Inner::Stopped { .. } => SchedulerState::Stopped,
        }
    }

    /// Spawns the sweep loop on the current tokio runtime. The first sweep runs
    /// immediately, then once per period.
    ///
    /// # Returns
    /// - `Ok(())` - Scheduler moved from Created to Running
    /// - `Err(SchedulerError::AlreadyRunning)` - Already started
    /// - `Err(SchedulerError::AlreadyStopped)` - Stopped schedulers cannot restart
    pub fn start(&self) -> Result<(), SchedulerError> {
        let mut inner = self.lock_inner();

        match *inner {
            Inner::Created => {}
            Inner::Running(_) => return Err(SchedulerError::AlreadyRunning),
            Inner::Stopped { .. } => return Err(SchedulerError::AlreadyStopped),
        }

        let handle = tokio::spawn(run(
            self.reconciler.clone(),
            self.period,
            self.cancel.clone(),
            self.finished.clone(),
        ));
        *inner = Inner::Running(handle);

        tracing::info!(
            "Auction expiry scheduler started (duration {:?}, period {:?})",
            self.reconciler.duration(),
            self.period
        );

        Ok(())
    }

    /// Stops the sweep loop and waits for it to exit.
    ///
    /// A sweep already in progress runs to completion; no sweep starts once this
    /// returns. Safe to call repeatedly or concurrently, and on a scheduler that was
    /// never started.
    pub async fn stop(&self) -> Result<(), SchedulerError> {
        let (handle, started) = {
            let mut inner = self.lock_inner();
            match std::mem::replace(&mut *inner, Inner::Stopped { started: false }) {
                Inner::Created => (None, false),
                Inner::Running(handle) => {
                    *inner = Inner::Stopped { started: true };
                    (Some(handle), true)
                }
                Inner::Stopped { started } => {
                    *inner = Inner::Stopped { started };
                    (None, started)
                }
            }
        };

        self.cancel.cancel();

        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                tracing::error!("Auction expiry scheduler task failed: {}", e);
            }
            tracing::info!("Auction expiry scheduler stopped");
        } else if started {
            self.finished.cancelled().await;
        }

        Ok(())
    }

    fn lock_inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn run(
    reconciler: Arc<AuctionExpiryReconciler>,
    period: Duration,
    cancel: CancellationToken,
    finished: CancellationToken,
) {
    let _finished = finished.drop_guard();

    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = interval.tick() => reconciler.run_sweep_cycle().await,
        }
    }
}
