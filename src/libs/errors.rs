//! Error taxonomy for the timer accounting engine.
//!
//! Every state-transition failure a caller can hit is a distinct variant so
//! stale client views can be told apart from real faults. These are surfaced
//! through `anyhow` at the command boundary and can be recovered with
//! `downcast_ref::<TimerError>()`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    /// An open time entry already exists for this `(item, entry kind)` pair.
    #[error("an open time entry already exists for item {item_id} ({entry_kind})")]
    Conflict { item_id: i64, entry_kind: String },

    /// Pause was requested while the entry is closed or already paused.
    #[error("time entry {0} is not running")]
    NotRunning(i64),

    /// Resume was requested while the entry is not paused.
    #[error("time entry {0} is not paused")]
    NotPaused(i64),

    /// Stop was requested on an entry whose end time is already set.
    #[error("time entry {0} is already closed")]
    AlreadyClosed(i64),

    /// The acting user has no accounting identity configured.
    #[error("no accounting identity is configured for the acting user")]
    IdentityNotFound,
}
