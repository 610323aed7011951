//! Background reconciliation of auction lifecycle state.
//!
//! `auction_expiry` holds the sweep itself; `lifecycle` owns the background task that
//! repeats it and the start/stop contract used by the process bootstrap.

pub mod auction_expiry;
pub mod lifecycle;

#[cfg(test)]
mod fake;
