//! Title catalog - the shared, read-mostly set of movies users search and
//! add to their lists.

mod sqlite;
mod types;

pub(crate) use sqlite::{find_title, load_genres, row_to_title, TITLE_COLUMNS};
pub use types::*;

use crate::query::TitleQuery;
use crate::store::StoreError;

/// Read access to the title catalog.
pub trait TitleCatalog: Send + Sync {
    /// Run a normalized search.
    ///
    /// Filters are conjunctive (title fragment, genre containment, inclusive
    /// year range). Results are sorted by the query's sort order, ties kept
    /// in catalog insertion order, and capped at [`TitleQuery::limit`].
    fn search(&self, query: &TitleQuery) -> Result<SearchResult, StoreError>;

    /// Get a title by its external id.
    fn get(&self, imdb_id: &str) -> Result<Title, StoreError>;
}
