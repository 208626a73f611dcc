use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{activity, handlers, lists, middleware, titles};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Everything except the health check requires an access token
    let authenticated = Router::new()
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        .route("/auth", post(handlers::whoami))
        // Catalog
        .route("/titles/search", get(titles::search_titles))
        .route("/titles/{imdb_id}", get(titles::get_title))
        // Lists; watch-later answers to both casings
        .route("/titles/favorite", get(lists::list_favorites))
        .route(
            "/titles/favorite/{imdb_id}",
            post(lists::add_favorite).delete(lists::remove_favorite),
        )
        .route("/titles/watchLater", get(lists::list_watch_later))
        .route("/titles/watchlater", get(lists::list_watch_later))
        .route(
            "/titles/watchLater/{imdb_id}",
            post(lists::add_watch_later).delete(lists::remove_watch_later),
        )
        .route(
            "/titles/watchlater/{imdb_id}",
            post(lists::add_watch_later).delete(lists::remove_watch_later),
        )
        // Activity
        .route("/activity", get(activity::get_activity))
        .route_layer(from_fn_with_state(state.clone(), middleware::auth_middleware));

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .merge(authenticated)
        .layer(from_fn(middleware::metrics_middleware))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
}
