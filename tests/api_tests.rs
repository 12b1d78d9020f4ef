//! Integration tests for the `/api/movies` endpoints.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use reelbox::config::Config;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();

    let state = reelbox::api::create_app_state_from_config(config, None)
        .await
        .expect("Failed to create app state");
    reelbox::api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref());
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create(app: &Router, body: Value) -> Value {
    let (status, created) = send_json(app, "POST", "/api/movies", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    created
}

#[tokio::test]
async fn test_movie_lifecycle() {
    let app = spawn_app().await;

    let created = create(
        &app,
        json!({"title": "Inception", "genre": "Sci-Fi", "releaseYear": 2010, "rating": 8.8}),
    )
    .await;

    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["title"], "Inception");
    assert_eq!(created["genre"], "Sci-Fi");
    assert_eq!(created["releaseYear"], 2010);
    assert_eq!(created["rating"], 8.8);

    let (status, fetched) = send_json(&app, "GET", &format!("/api/movies/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = send(&app, "DELETE", &format!("/api/movies/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, error) = send_json(&app, "GET", &format!("/api/movies/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["status"], 404);
    assert_eq!(error["error"], "Not Found");
    assert_eq!(
        error["message"],
        format!("Movie not found exception for id:{id}")
    );
    assert!(error["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_ignores_client_id_and_allows_missing_optionals() {
    let app = spawn_app().await;

    let created = create(&app, json!({"id": 999, "title": "Untitled"})).await;

    assert_ne!(created["id"], 999);
    assert!(created["genre"].is_null());
    assert!(created["releaseYear"].is_null());
    assert!(created["rating"].is_null());
}

#[tokio::test]
async fn test_create_rejects_malformed_body() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/movies")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"title\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["status"], 400);
    assert_eq!(error["error"], "Bad Request");

    let (status, _) = send_json(&app, "POST", "/api/movies", Some(json!({"genre": "Drama"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_returns_bare_array_in_id_order() {
    let app = spawn_app().await;

    let (status, listed) = send_json(&app, "GET", "/api/movies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));

    let first = create(&app, json!({"title": "Heat", "releaseYear": 1995})).await;
    let second = create(&app, json!({"title": "Arrival", "releaseYear": 2016})).await;

    let (status, listed) = send_json(&app, "GET", "/api/movies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([first, second]));
}

#[tokio::test]
async fn test_list_paged_envelope() {
    let app = spawn_app().await;

    for (title, year) in [("A", 2001), ("B", 2002), ("C", 2003), ("D", 2004), ("E", 2005)] {
        create(&app, json!({"title": title, "releaseYear": year})).await;
    }

    let (status, page) = send_json(&app, "GET", "/api/movies?page=1&size=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalElements"], 5);
    assert_eq!(page["totalPages"], 3);
    assert_eq!(page["number"], 1);
    assert_eq!(page["size"], 2);
    assert_eq!(page["numberOfElements"], 2);
    assert_eq!(page["first"], false);
    assert_eq!(page["last"], false);
    assert_eq!(page["content"][0]["title"], "C");
    assert_eq!(page["content"][1]["title"], "D");

    let (_, page) = send_json(&app, "GET", "/api/movies?page=2&size=2", None).await;
    assert_eq!(page["numberOfElements"], 1);
    assert_eq!(page["last"], true);

    let (_, page) = send_json(&app, "GET", "/api/movies?page=9&size=2", None).await;
    assert_eq!(page["empty"], true);
    assert_eq!(page["content"], json!([]));
}

#[tokio::test]
async fn test_list_paged_sorting() {
    let app = spawn_app().await;

    create(&app, json!({"title": "Middle", "rating": 7.0})).await;
    create(&app, json!({"title": "Best", "rating": 9.1})).await;
    create(&app, json!({"title": "Worst", "rating": 3.2})).await;

    let (status, page) = send_json(&app, "GET", "/api/movies?sort=rating,desc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["size"], 20);

    let titles: Vec<&str> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Best", "Middle", "Worst"]);

    let (_, page) = send_json(&app, "GET", "/api/movies?sort=title", None).await;
    assert_eq!(page["content"][0]["title"], "Best");
}

#[tokio::test]
async fn test_list_rejects_invalid_paging() {
    let app = spawn_app().await;

    for uri in [
        "/api/movies?size=0",
        "/api/movies?size=5000",
        "/api/movies?sort=budget",
        "/api/movies?sort=title,sideways",
        "/api/movies?page=-1",
    ] {
        let (status, error) = send_json(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(error["status"], 400, "{uri}");
    }
}

#[tokio::test]
async fn test_update_returns_merged_record() {
    let app = spawn_app().await;

    let created = create(
        &app,
        json!({"title": "Blade Runner", "genre": "Sci-Fi", "releaseYear": 1982, "rating": 8.1}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/api/movies/{id}"),
        Some(json!({"id": 12345, "title": "Blade Runner (Final Cut)", "releaseYear": 2007})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["title"], "Blade Runner (Final Cut)");
    assert_eq!(updated["releaseYear"], 2007);
    assert!(updated["genre"].is_null());
    assert!(updated["rating"].is_null());

    let (_, fetched) = send_json(&app, "GET", &format!("/api/movies/{id}"), None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_missing_movie_is_not_found() {
    let app = spawn_app().await;

    let (status, error) = send_json(
        &app,
        "PUT",
        "/api/movies/42",
        Some(json!({"title": "Ghost"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["message"], "Movie not found exception for id:42");

    let (_, listed) = send_json(&app, "GET", "/api/movies", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_delete_missing_movie_is_empty_not_found() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "DELETE", "/api/movies/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = spawn_app().await;

    let (status, error) = send_json(&app, "GET", "/api/movies/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "Bad Request");
}

#[tokio::test]
async fn test_search_by_title_and_year() {
    let app = spawn_app().await;

    let remake = create(&app, json!({"title": "Dune", "releaseYear": 2021})).await;
    create(&app, json!({"title": "Dune", "releaseYear": 1984})).await;
    create(&app, json!({"title": "dune", "releaseYear": 2021})).await;

    let (status, found) =
        send_json(&app, "GET", "/api/movies/search?title=Dune&year=2021", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, json!([remake]));

    let (status, found) =
        send_json(&app, "GET", "/api/movies/search?title=Dune&year=1999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, json!([]));
}

#[tokio::test]
async fn test_search_requires_both_parameters() {
    let app = spawn_app().await;

    let (status, _) = send_json(&app, "GET", "/api/movies/search?title=Dune", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        send_json(&app, "GET", "/api/movies/search?title=Dune&year=soon", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_title_fragment_search() {
    let app = spawn_app().await;

    create(&app, json!({"title": "The Matrix", "releaseYear": 1999})).await;
    create(&app, json!({"title": "The Matrix Reloaded", "releaseYear": 2003})).await;
    create(&app, json!({"title": "Memento", "releaseYear": 2000})).await;

    let (status, found) = send_json(&app, "GET", "/api/movies/search/title?q=matrix", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().unwrap().len(), 2);

    let (status, _) = send_json(&app, "GET", "/api/movies/search/title?q=%20", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_by_year() {
    let app = spawn_app().await;

    create(&app, json!({"title": "Memento", "releaseYear": 2000})).await;
    create(&app, json!({"title": "Gladiator", "releaseYear": 2000})).await;
    create(&app, json!({"title": "Se7en", "releaseYear": 1995})).await;

    let (status, found) = send_json(&app, "GET", "/api/movies/year/2000", None).await;
    assert_eq!(status, StatusCode::OK);

    let titles: Vec<&str> = found
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Memento", "Gladiator"]);
}
