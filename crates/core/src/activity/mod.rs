//! Append-only activity ledger of list membership changes.
//!
//! Entries are only ever written inside the transaction that changes the
//! membership (see [`crate::lists`]); this module exposes the read side.

mod sqlite;
mod types;

pub(crate) use sqlite::append_activity;
pub use types::*;

use crate::store::StoreError;

/// Read access to the activity ledger.
pub trait ActivityLedger: Send + Sync {
    /// Every entry, newest first, joined with username and title name.
    ///
    /// Unbounded: the result grows with the ledger.
    fn feed(&self) -> Result<Vec<ActivityFeedItem>, StoreError>;
}
