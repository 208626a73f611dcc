use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a user did to one of their lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityKind {
    Favorite,
    RemoveFavorited,
    WatchLater,
    RemoveWatchLater,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Favorite => "favorite",
            ActivityKind::RemoveFavorited => "removeFavorited",
            ActivityKind::WatchLater => "watchLater",
            ActivityKind::RemoveWatchLater => "removeWatchLater",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "favorite" => Some(ActivityKind::Favorite),
            "removeFavorited" => Some(ActivityKind::RemoveFavorited),
            "watchLater" => Some(ActivityKind::WatchLater),
            "removeWatchLater" => Some(ActivityKind::RemoveWatchLater),
            _ => None,
        }
    }
}

/// One immutable ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: i64,
    /// Acting user.
    pub user_id: i64,
    /// Internal id of the affected title.
    pub title_id: i64,
    pub activity_type: ActivityKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityUser {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTitle {
    pub imdb_id: String,
    pub title: String,
}

/// Feed projection: an entry joined with the acting username and the title
/// display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFeedItem {
    #[serde(flatten)]
    pub entry: ActivityEntry,
    pub user: ActivityUser,
    pub title: ActivityTitle,
}
