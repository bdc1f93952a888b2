//! End-to-end router tests over in-memory stores.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use safesender_api::setup::routes::setup_routes;
use safesender_api::state::AppState;
use safesender_core::{Config, StorageBackend, UuidTokenGenerator};
use safesender_db::InMemoryFileRecordRepository;
use safesender_services::FilesService;
use safesender_storage::InMemoryBlobStore;

const BOUNDARY: &str = "test-boundary";

fn test_config() -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        db_timeout_seconds: 5,
        storage_backend: StorageBackend::Memory,
        local_storage_path: None,
        max_file_size_bytes: 1024 * 1024,
    }
}

fn test_router() -> Router {
    let config = test_config();
    let files = FilesService::new(
        Arc::new(InMemoryFileRecordRepository::new()),
        Arc::new(InMemoryBlobStore::new()),
        Arc::new(UuidTokenGenerator),
        Arc::new(config.clone()),
    );
    let state = Arc::new(AppState::new(config.clone(), files, CancellationToken::new()));
    setup_routes(&config, state).expect("router setup")
}

fn multipart_body(file_name: &str, data: &[u8], password_hash: &str, size: i64) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(
        format!(
            "\r\n--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"password_hash\"\r\n\r\n{password_hash}\r\n--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"original_file_size\"\r\n\r\n{size}\r\n--{BOUNDARY}--\r\n"
        )
        .as_bytes(),
    );
    body
}

fn upload_request(file_name: &str, data: &[u8], password_hash: &str, size: i64) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v0/files")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(file_name, data, password_hash, size)))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let router = test_router();
    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_upload_then_download_round_trip() {
    let router = test_router();
    let data = b"report contents";

    let response = router
        .clone()
        .oneshot(upload_request("report.pdf", data, "hash123", 2048))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let token = json["token"].as_str().expect("token in response").to_string();
    assert!(!token.is_empty());

    let response = router
        .oneshot(
            Request::builder()
                .uri(format!("/api/v0/files/{token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["file_name"], "report.pdf");
    assert_eq!(json["password_hash"], "hash123");
    assert_eq!(json["original_file_size"], 2048);
    assert_eq!(json["file_data"], STANDARD.encode(data));
}

#[tokio::test]
async fn test_download_unknown_token_is_404() {
    let router = test_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v0/files/nonexistent-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_upload_without_password_hash_is_400() {
    let router = test_router();

    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"a.txt\"\r\n\r\nx\r\n--{BOUNDARY}--\r\n"
        )
        .as_bytes(),
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/v0/files")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_upload_over_size_limit_is_413() {
    let router = test_router();
    let oversized = vec![0u8; 1024 * 1024 + 1];

    let response = router
        .oneshot(upload_request("big.bin", &oversized, "hash", 0))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_sequential_uploads_yield_distinct_tokens() {
    let router = test_router();
    let mut tokens = Vec::new();

    for i in 0..3 {
        let response = router
            .clone()
            .oneshot(upload_request(
                &format!("file-{i}.txt"),
                b"data",
                "hash",
                4,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        tokens.push(json["token"].as_str().unwrap().to_string());
    }

    let mut deduped = tokens.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), tokens.len());
}
