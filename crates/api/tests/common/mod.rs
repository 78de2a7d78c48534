//! Shared helpers for API integration tests.
//!
//! Builds the application through [`build_app_router`] so tests exercise
//! the same middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery) that production uses, with a temporary photo store root.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tablilla_core::storage::PhotoStore;
use tempfile::TempDir;
use tower::ServiceExt;

use tablilla_api::config::ServerConfig;
use tablilla_api::router::build_app_router;
use tablilla_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(upload_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_root: upload_root.to_path_buf(),
        public_base_url: "http://localhost:3000".to_string(),
    }
}

/// Build the full application router against the given pool, storing
/// photos under a temporary directory.
///
/// The returned [`TempDir`] must be kept alive for the duration of the
/// test; dropping it deletes the upload root.
pub fn build_test_app(pool: PgPool) -> (Router, TempDir) {
    let upload_dir = TempDir::new().expect("create temp upload root");
    let config = test_config(upload_dir.path());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        photos: Arc::new(PhotoStore::new(
            config.upload_root.clone(),
            config.public_base_url.clone(),
        )),
    };

    (build_app_router(state, &config), upload_dir)
}

/// Issue a GET request.
pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Issue a POST request with a JSON body.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Issue a POST request with a urlencoded form body.
pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Issue a POST request with a multipart body using the given boundary.
pub async fn post_multipart(app: &Router, uri: &str, boundary: &str, body: Vec<u8>) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body into a string (for HTML fragments).
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Open (or resolve) a case for a plate and return its id.
pub async fn open_case(app: &Router, plate: &str) -> i64 {
    let response = post_json(app, "/api/v1/cases", serde_json::json!({ "plate": plate })).await;
    assert!(
        response.status() == StatusCode::OK || response.status() == StatusCode::CREATED,
        "unexpected status {}",
        response.status(),
    );
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}
