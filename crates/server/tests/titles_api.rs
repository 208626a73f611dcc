//! Catalog search and lookup through the HTTP API.

mod common;

use axum::http::StatusCode;
use common::{imdb_ids, TestFixture};
use serde_json::json;

/// A(1990, 7.0, [Action]), B(2005, 9.0, [Action, Drama]), C(1980, 5.0, [Drama])
fn abc_fixture() -> TestFixture {
    let fixture = TestFixture::new();
    fixture.seed_title("tt0000001", "Alpha", 1990, 7.0, &["Action"]);
    fixture.seed_title("tt0000002", "Bravo", 2005, 9.0, &["Action", "Drama"]);
    fixture.seed_title("tt0000003", "Charlie", 1980, 5.0, &["Drama"]);
    fixture
}

#[tokio::test]
async fn test_search_requires_token() {
    let fixture = abc_fixture();

    let response = fixture
        .request("GET", "/api/v1/titles/search", None)
        .await;
    assert_status!(response, StatusCode::UNAUTHORIZED);

    let response = fixture
        .request("GET", "/api/v1/titles/search", Some("not-a-token"))
        .await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_search_without_filters_returns_latest_first() {
    let fixture = abc_fixture();

    let response = fixture.get("/api/v1/titles/search").await;

    assert_status!(response, StatusCode::OK);
    assert_json_path!(response.body, "totalCount", json!(3));
    assert_eq!(
        imdb_ids(&response.body["titles"]),
        vec!["tt0000002", "tt0000001", "tt0000003"]
    );
}

#[tokio::test]
async fn test_search_genre_and_rating_sort() {
    let fixture = abc_fixture();

    let response = fixture
        .get("/api/v1/titles/search?genres=action&sort=highestrated")
        .await;

    assert_status!(response, StatusCode::OK);
    assert_json_path!(response.body, "totalCount", json!(2));
    assert_eq!(
        imdb_ids(&response.body["titles"]),
        vec!["tt0000002", "tt0000001"]
    );
}

#[tokio::test]
async fn test_search_year_range() {
    let fixture = abc_fixture();

    let response = fixture
        .get("/api/v1/titles/search?minYear=1985&maxYear=2000")
        .await;

    assert_status!(response, StatusCode::OK);
    assert_json_path!(response.body, "totalCount", json!(1));
    assert_eq!(imdb_ids(&response.body["titles"]), vec!["tt0000001"]);
}

#[tokio::test]
async fn test_search_genre_conjunction() {
    let fixture = abc_fixture();

    let response = fixture
        .get("/api/v1/titles/search?genres=action,drama")
        .await;

    assert_eq!(imdb_ids(&response.body["titles"]), vec!["tt0000002"]);
}

#[tokio::test]
async fn test_search_title_fragment_is_case_insensitive() {
    let fixture = abc_fixture();

    let response = fixture.get("/api/v1/titles/search?title=RAV").await;

    assert_eq!(imdb_ids(&response.body["titles"]), vec!["tt0000002"]);
}

#[tokio::test]
async fn test_search_malformed_parameters_fall_back_to_defaults() {
    let fixture = abc_fixture();

    let response = fixture
        .get("/api/v1/titles/search?minYear=abc&maxYear=&sort=sideways&page=-4")
        .await;

    assert_status!(response, StatusCode::OK);
    assert_json_path!(response.body, "totalCount", json!(3));
    assert_eq!(
        imdb_ids(&response.body["titles"]),
        vec!["tt0000002", "tt0000001", "tt0000003"]
    );
}

#[tokio::test]
async fn test_search_repeated_keys_keep_first_value() {
    let fixture = abc_fixture();

    let response = fixture
        .get("/api/v1/titles/search?page=1&page=2&minYear=1985&minYear=2010&genres=action&genres=drama")
        .await;

    assert_status!(response, StatusCode::OK);
    assert_json_path!(response.body, "totalCount", json!(2));
    assert_eq!(
        imdb_ids(&response.body["titles"]),
        vec!["tt0000002", "tt0000001"]
    );
}

#[tokio::test]
async fn test_search_title_fragment_folds_accented_letters() {
    let fixture = abc_fixture();
    fixture.seed_title("tt0211915", "Amélie", 2001, 8.3, &["Comedy"]);

    for fragment in ["am%C3%A9lie", "AM%C3%89LIE"] {
        let response = fixture
            .get(&format!("/api/v1/titles/search?title={}", fragment))
            .await;

        assert_status!(response, StatusCode::OK);
        assert_json_path!(response.body, "totalCount", json!(1));
        assert_eq!(imdb_ids(&response.body["titles"]), vec!["tt0211915"]);
    }
}

#[tokio::test]
async fn test_search_uses_configured_latest_year() {
    let fixture = TestFixture::with_latest_year(2000);
    fixture.seed_title("tt0000001", "Old", 1999, 6.0, &[]);
    fixture.seed_title("tt0000002", "New", 2010, 6.0, &[]);

    let response = fixture.get("/api/v1/titles/search").await;

    assert_eq!(imdb_ids(&response.body["titles"]), vec!["tt0000001"]);
}

#[tokio::test]
async fn test_search_pages_grow_the_prefix() {
    let fixture = TestFixture::new();
    for i in 0..60 {
        fixture.seed_title(&format!("tt{:07}", i), &format!("Title {}", i), 2000, 5.0, &[]);
    }

    let first = fixture.get("/api/v1/titles/search").await;
    let second = fixture.get("/api/v1/titles/search?page=2").await;

    assert_json_path!(first.body, "totalCount", json!(50));
    assert_json_path!(second.body, "totalCount", json!(60));
    assert_eq!(
        imdb_ids(&first.body["titles"])[..],
        imdb_ids(&second.body["titles"])[..50]
    );
}

#[tokio::test]
async fn test_get_title() {
    let fixture = abc_fixture();

    let response = fixture.get("/api/v1/titles/tt0000002").await;

    assert_status!(response, StatusCode::OK);
    assert_json_path!(response.body, "title", json!("Bravo"));
    assert_json_path!(response.body, "released", json!(2005));
    assert_json_path!(response.body, "imdbrating", json!(9.0));
    assert_json_path!(response.body, "genres", json!(["Action", "Drama"]));
}

#[tokio::test]
async fn test_get_unknown_title_is_404() {
    let fixture = abc_fixture();

    let response = fixture.get("/api/v1/titles/tt9999999").await;

    assert_status!(response, StatusCode::NOT_FOUND);
    assert!(response.body["error"].is_string());
}

#[tokio::test]
async fn test_health_is_public() {
    let fixture = TestFixture::new();

    let response = fixture.request("GET", "/api/v1/health", None).await;

    assert_status!(response, StatusCode::OK);
    assert_json_path!(response.body, "status", json!("ok"));
}

#[tokio::test]
async fn test_auth_echoes_identity() {
    let fixture = TestFixture::new();

    let response = fixture
        .request("POST", "/api/v1/auth", Some(common::BOB_TOKEN))
        .await;

    assert_status!(response, StatusCode::OK);
    assert_json_path!(response.body, "username", json!("bob"));
    assert!(response.body["userId"].is_i64());
}

#[tokio::test]
async fn test_config_is_sanitized() {
    let fixture = TestFixture::new();

    let response = fixture.get("/api/v1/config").await;

    assert_status!(response, StatusCode::OK);
    assert_json_path!(response.body["auth"], "method", json!("token"));
    assert_json_path!(response.body["auth"], "tokens_configured", json!(2));
    assert!(!response.body.to_string().contains(common::ALICE_TOKEN));
}
