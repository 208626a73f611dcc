//! Common test utilities for API testing.
//!
//! Builds the full router in-process over a SQLite file in a temporary
//! directory, with two token users (`alice` and `bob`) provisioned.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use cineguru_core::store::DEFAULT_BUSY_TIMEOUT;
use cineguru_core::{
    create_authenticator, load_config_from_str, ActivityLedger, Authenticator, ListCoordinator,
    NewTitle, SqliteStore, Title, TitleCatalog,
};
use cineguru_server::state::AppState;

pub const ALICE_TOKEN: &str = "alice-token";
pub const BOB_TOKEN: &str = "bob-token";

/// Test fixture for API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_lookup() {
///     let fixture = TestFixture::new();
///     fixture.seed_title("tt0133093", "The Matrix", 1999, 8.7, &["Action"]);
///
///     let response = fixture.get("/api/v1/titles/tt0133093").await;
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Store behind the router, for seeding the catalog
    pub store: Arc<SqliteStore>,
    /// Temporary directory holding the database file
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture with the default search configuration.
    pub fn new() -> Self {
        Self::with_latest_year(2022)
    }

    /// Create a fixture whose searches default to `latest_year` as upper bound.
    pub fn with_latest_year(latest_year: i32) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");

        let config = load_config_from_str(&format!(
            r#"
[auth]
method = "token"

[[auth.tokens]]
token = "{}"
username = "alice"

[[auth.tokens]]
token = "{}"
username = "bob"

[server]
host = "127.0.0.1"
port = 8000

[database]
path = "{}"

[search]
latest_year = {}
"#,
            ALICE_TOKEN,
            BOB_TOKEN,
            db_path.display(),
            latest_year
        ))
        .expect("Failed to parse test config");

        let store = Arc::new(
            SqliteStore::new(&db_path, DEFAULT_BUSY_TIMEOUT).expect("Failed to open store"),
        );

        let authenticator: Arc<dyn Authenticator> = Arc::from(
            create_authenticator(&config.auth, store.as_ref())
                .expect("Failed to create authenticator"),
        );
        let catalog: Arc<dyn TitleCatalog> = store.clone();
        let activity: Arc<dyn ActivityLedger> = store.clone();

        let state = Arc::new(AppState::new(
            config,
            authenticator,
            catalog,
            ListCoordinator::new(store.clone()),
            activity,
        ));

        let router = cineguru_server::api::create_router(state);

        Self {
            router,
            store,
            temp_dir,
        }
    }

    /// Insert a title into the catalog.
    pub fn seed_title(
        &self,
        imdb_id: &str,
        title: &str,
        released: i32,
        imdb_rating: f64,
        genres: &[&str],
    ) -> Title {
        self.store
            .insert_title(&NewTitle {
                imdb_id: imdb_id.to_string(),
                title: title.to_string(),
                synopsis: format!("Synopsis of {}", title),
                genres: genres.iter().map(|g| g.to_string()).collect(),
                released,
                imdb_rating,
            })
            .expect("Failed to seed title")
    }

    /// Send a GET request as alice.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, Some(ALICE_TOKEN)).await
    }

    /// Send a POST request as alice.
    pub async fn post(&self, path: &str) -> TestResponse {
        self.request("POST", path, Some(ALICE_TOKEN)).await
    }

    /// Send a DELETE request as alice.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, Some(ALICE_TOKEN)).await
    }

    /// Send a request with an explicit token, or none.
    pub async fn request(&self, method: &str, path: &str, token: Option<&str>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            request_builder = request_builder.header("Authorization", format!("Bearer {}", token));
        }

        let request = request_builder.body(Body::empty()).unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}

/// Helper to assert a JSON path equals expected value.
#[macro_export]
macro_rules! assert_json_path {
    ($json:expr, $path:expr, $expected:expr) => {
        let actual = &$json[$path];
        assert_eq!(
            actual, &$expected,
            "Path '{}' expected {:?}, got {:?}",
            $path, $expected, actual
        );
    };
}

/// Imdb ids of a JSON array of titles, in order.
pub fn imdb_ids(titles: &Value) -> Vec<String> {
    titles
        .as_array()
        .expect("expected an array of titles")
        .iter()
        .map(|t| t["imdbId"].as_str().unwrap_or_default().to_string())
        .collect()
}
