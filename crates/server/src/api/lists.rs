//! Favorite and watch-later list handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use cineguru_core::{ListKind, Title, ToggleDirection, ToggleOutcome};

use super::error::ApiError;
use super::middleware::AuthUser;
use crate::state::AppState;

fn list(state: &AppState, user: AuthUser, kind: ListKind) -> Result<Json<Vec<Title>>, ApiError> {
    Ok(Json(state.lists().titles(&user.0, kind)?))
}

fn toggle(
    state: &AppState,
    user: AuthUser,
    imdb_id: &str,
    kind: ListKind,
    direction: ToggleDirection,
) -> Result<Json<ToggleOutcome>, ApiError> {
    Ok(Json(state.lists().toggle(&user.0, imdb_id, kind, direction)?))
}

/// GET /api/v1/titles/favorite
pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<Json<Vec<Title>>, ApiError> {
    list(&state, user, ListKind::Favorite)
}

/// GET /api/v1/titles/watchLater
pub async fn list_watch_later(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<Json<Vec<Title>>, ApiError> {
    list(&state, user, ListKind::WatchLater)
}

/// POST /api/v1/titles/favorite/{imdb_id}
///
/// Responds with the caller's updated favorites.
pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(imdb_id): Path<String>,
) -> Result<Json<ToggleOutcome>, ApiError> {
    toggle(&state, user, &imdb_id, ListKind::Favorite, ToggleDirection::Add)
}

/// DELETE /api/v1/titles/favorite/{imdb_id}
///
/// Responds with the activity entry recording the removal.
pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(imdb_id): Path<String>,
) -> Result<Json<ToggleOutcome>, ApiError> {
    toggle(&state, user, &imdb_id, ListKind::Favorite, ToggleDirection::Remove)
}

/// POST /api/v1/titles/watchLater/{imdb_id}
pub async fn add_watch_later(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(imdb_id): Path<String>,
) -> Result<Json<ToggleOutcome>, ApiError> {
    toggle(&state, user, &imdb_id, ListKind::WatchLater, ToggleDirection::Add)
}

/// DELETE /api/v1/titles/watchLater/{imdb_id}
pub async fn remove_watch_later(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(imdb_id): Path<String>,
) -> Result<Json<ToggleOutcome>, ApiError> {
    toggle(&state, user, &imdb_id, ListKind::WatchLater, ToggleDirection::Remove)
}
