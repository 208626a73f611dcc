//! Types for the title catalog.

use serde::{Deserialize, Serialize};

/// A catalog entry for one movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    /// Internal row id.
    pub id: i64,
    /// External catalog identifier (e.g. "tt0133093").
    pub imdb_id: String,
    /// Display title.
    pub title: String,
    pub synopsis: String,
    /// Genre tags in catalog order.
    pub genres: Vec<String>,
    /// Release year.
    pub released: i32,
    /// Rating on the external source's scale.
    #[serde(rename = "imdbrating")]
    pub imdb_rating: f64,
}

/// A title to be inserted into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTitle {
    pub imdb_id: String,
    pub title: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub released: i32,
    #[serde(rename = "imdbrating", default)]
    pub imdb_rating: f64,
}

/// Search response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Length of `titles`, not the number of matches beyond the page cap.
    pub total_count: usize,
    pub titles: Vec<Title>,
}

impl From<Vec<Title>> for SearchResult {
    fn from(titles: Vec<Title>) -> Self {
        Self {
            total_count: titles.len(),
            titles,
        }
    }
}
