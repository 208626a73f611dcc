//! Users who own lists and appear in the activity feed.
//!
//! Credentials are opaque here; verifying them belongs to the
//! authenticator.

mod sqlite;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Trait for user storage.
pub trait UserStore: Send + Sync {
    /// Return the user with this username, creating it if needed.
    fn ensure_user(&self, username: &str) -> Result<User, StoreError>;
}
