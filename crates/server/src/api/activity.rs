//! Activity feed handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use cineguru_core::ActivityFeedItem;

use super::error::ApiError;
use crate::state::AppState;

/// GET /api/v1/activity
///
/// Every entry from every user, newest first.
pub async fn get_activity(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ActivityFeedItem>>, ApiError> {
    Ok(Json(state.activity().feed()?))
}
