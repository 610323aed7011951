use thiserror::Error;

/// Contract violations of the expiry scheduler lifecycle.
///
/// These indicate a bug in the embedding code rather than a runtime condition, so they
/// are returned to the caller instead of being logged and swallowed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchedulerError {
    /// `start()` was called on a scheduler that is already running.
    #[error("Auction expiry scheduler is already running")]
    AlreadyRunning,

    /// `start()` was called on a scheduler that has been stopped. Stopped is terminal.
    #[error("Auction expiry scheduler has been stopped and cannot be restarted")]
    AlreadyStopped,
}
