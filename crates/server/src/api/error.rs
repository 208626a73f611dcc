//! Mapping of store failures onto HTTP responses.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use cineguru_core::StoreError;
use serde::Serialize;

use crate::metrics::STORE_ERRORS_TOTAL;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error returned by API handlers.
#[derive(Debug)]
pub struct ApiError(pub StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Store internals are logged, never returned.
        let (status, message) = match &self.0 {
            StoreError::NotFound(what) => (StatusCode::NOT_FOUND, format!("Not found: {}", what)),
            StoreError::Unavailable(detail) => {
                tracing::warn!(error = %detail, "Store unavailable");
                STORE_ERRORS_TOTAL.with_label_values(&["unavailable"]).inc();
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service temporarily unavailable, retry later".to_string(),
                )
            }
            StoreError::Database(detail) => {
                tracing::error!(error = %detail, "Store failure");
                STORE_ERRORS_TOTAL.with_label_values(&["database"]).inc();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let mut response = (status, Json(ErrorResponse { error: message })).into_response();
        if self.0.is_retryable() {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from_static("1"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = ApiError(StoreError::NotFound("title tt1".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await["error"], "Not found: title tt1");
    }

    #[tokio::test]
    async fn test_unavailable_maps_to_503() {
        let response =
            ApiError(StoreError::Unavailable("database is locked".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.headers()[header::RETRY_AFTER], "1");
    }

    #[tokio::test]
    async fn test_database_error_does_not_leak_details() {
        let response =
            ApiError(StoreError::Database("no such table: titles".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert!(!body["error"].as_str().unwrap().contains("titles"));
    }
}
