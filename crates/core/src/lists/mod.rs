//! Per-user Favorite and WatchLater lists.
//!
//! Every membership change is written together with its activity entry in a
//! single transaction.

mod coordinator;
mod sqlite;

pub use coordinator::*;

use serde::{Deserialize, Serialize};

use crate::activity::{ActivityEntry, ActivityKind};
use crate::catalog::Title;
use crate::store::StoreError;

/// Which of a user's two lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListKind {
    Favorite,
    WatchLater,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Favorite => "favorite",
            ListKind::WatchLater => "watchLater",
        }
    }

    pub(crate) fn table(&self) -> &'static str {
        match self {
            ListKind::Favorite => "user_favorites",
            ListKind::WatchLater => "user_watch_later",
        }
    }

    /// Activity recorded when a title is added to this list.
    pub fn added_activity(&self) -> ActivityKind {
        match self {
            ListKind::Favorite => ActivityKind::Favorite,
            ListKind::WatchLater => ActivityKind::WatchLater,
        }
    }

    /// Activity recorded when a title is removed from this list.
    pub fn removed_activity(&self) -> ActivityKind {
        match self {
            ListKind::Favorite => ActivityKind::RemoveFavorited,
            ListKind::WatchLater => ActivityKind::RemoveWatchLater,
        }
    }
}

/// Result of an add.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// Membership created; carries the entry appended with it.
    Added(ActivityEntry),
    /// The title was already on the list. Nothing was written.
    AlreadyPresent,
}

/// Storage for list memberships.
pub trait ListStore: Send + Sync {
    /// Titles on a user's list, in the order they were added.
    fn list(&self, user_id: i64, kind: ListKind) -> Result<Vec<Title>, StoreError>;

    /// Add a title to a user's list. Idempotent.
    ///
    /// Fails with [`StoreError::NotFound`] if the user or title does not exist.
    fn add(&self, user_id: i64, imdb_id: &str, kind: ListKind) -> Result<AddOutcome, StoreError>;

    /// Remove a title from a user's list and return the appended entry.
    ///
    /// Fails with [`StoreError::NotFound`] if the user, the title or the
    /// membership does not exist; nothing is written in that case.
    fn remove(&self, user_id: i64, imdb_id: &str, kind: ListKind)
        -> Result<ActivityEntry, StoreError>;
}
