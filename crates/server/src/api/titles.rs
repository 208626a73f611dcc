//! Catalog search and title lookup handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use cineguru_core::{RawTitleQuery, SearchResult, Title, TitleQuery};

use super::error::ApiError;
use crate::state::AppState;

/// GET /api/v1/titles/search
///
/// Every parameter is optional; malformed or repeated values fall back to
/// defaults or the first occurrence.
pub async fn search_titles(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResult>, ApiError> {
    let raw = RawTitleQuery::from_pairs(pairs);
    let query = TitleQuery::from_raw(&raw, state.latest_year());
    let result = state.catalog().search(&query)?;
    Ok(Json(result))
}

/// GET /api/v1/titles/{imdb_id}
pub async fn get_title(
    State(state): State<Arc<AppState>>,
    Path(imdb_id): Path<String>,
) -> Result<Json<Title>, ApiError> {
    Ok(Json(state.catalog().get(&imdb_id)?))
}
