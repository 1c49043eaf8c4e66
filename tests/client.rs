//! Integration tests against a local stub backend.
//!
//! Spins up an axum server on an ephemeral port that speaks the backend
//! contract (health, index, qa, refactor, history, plus the documented
//! error-body shapes) and drives the client library against it.

use std::io::Write;
use std::net::SocketAddr;

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use codebase_qa::client::ApiClient;
use codebase_qa::render::{render_markdown, render_reference, render_snippet};

async fn stub_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "backend": {"status": "ok", "message": "Backend is running"},
        "vector_db": {"status": "ok", "message": "Chroma is available", "chunk_count": 128},
        "llm": {"status": "ok", "message": "LLM (OpenAI) connection OK"}
    }))
}

async fn stub_qa(Json(body): Json<serde_json::Value>) -> impl IntoResponse {
    let question = body.get("question").and_then(|q| q.as_str()).unwrap_or("");
    if question.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": [{"msg": "field required"}]})),
        )
            .into_response();
    }
    Json(json!({
        "answer": "It's in main.go",
        "references": [{"file_path": "main.go", "start_line": 1, "end_line": 10}],
        "retrieved_snippets": [
            {"file_path": "main.go", "start_line": 1, "end_line": 10, "text": "func main() {}"}
        ]
    }))
    .into_response()
}

/// Echoes the multipart field back so the test can assert what arrived.
async fn stub_index_zip(mut multipart: Multipart) -> Json<serde_json::Value> {
    let mut description = String::new();
    let mut size = 0usize;
    while let Some(field) = multipart.next_field().await.unwrap() {
        description = format!(
            "{}:{}",
            field.name().unwrap_or(""),
            field.file_name().unwrap_or("")
        );
        size = field.bytes().await.unwrap().len();
    }
    Json(json!({"status": "ok", "message": description, "chunks": size}))
}

async fn stub_index_github(Json(body): Json<serde_json::Value>) -> impl IntoResponse {
    let url = body.get("repo_url").and_then(|u| u.as_str()).unwrap_or("");
    if !url.starts_with("https://github.com/") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Invalid GitHub URL"})),
        )
            .into_response();
    }
    Json(json!({"status": "ok", "message": "Indexed", "chunks": 42})).into_response()
}

async fn stub_refactor() -> Json<serde_json::Value> {
    Json(json!({
        "suggestions": [
            {"title": "Extract helper", "description": "Pull the parsing loop out.",
             "file_path": "src/app.py", "start_line": 10, "end_line": 30}
        ],
        "retrieved_snippets": []
    }))
}

async fn stub_history() -> Json<serde_json::Value> {
    Json(json!({
        "history": [
            {"question": "Where is main?", "answer": "It's in main.go",
             "references": [{"file_path": "main.go", "start_line": 1, "end_line": 10}],
             "retrieved_snippets": []}
        ]
    }))
}

async fn stub_broken_health() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}

async fn stub_missing_history() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "not found"})))
}

/// Bind the given router under `/api` on an ephemeral port.
async fn spawn_backend(app: Router) -> SocketAddr {
    let app = Router::new().nest("/api", app);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn healthy_routes() -> Router {
    Router::new()
        .route("/health", get(stub_health))
        .route("/qa", post(stub_qa))
        .route("/index/zip", post(stub_index_zip))
        .route("/index/github", post(stub_index_github))
        .route("/refactor", post(stub_refactor))
        .route("/history", get(stub_history))
}

fn broken_routes() -> Router {
    Router::new()
        .route("/health", get(stub_broken_health))
        .route("/history", get(stub_missing_history))
        .route("/qa", post(stub_qa))
}

async fn client_for(app: Router) -> ApiClient {
    let addr = spawn_backend(app).await;
    ApiClient::with_base_url(&format!("http://{}/api", addr)).unwrap()
}

#[tokio::test]
async fn health_roundtrip() {
    let client = client_for(healthy_routes()).await;
    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.vector_db.chunk_count, Some(128));
    assert_eq!(health.backend.message.as_deref(), Some("Backend is running"));
}

#[tokio::test]
async fn ask_returns_answer_with_citations() {
    let client = client_for(healthy_routes()).await;
    let result = client.ask("Where is main?").await.unwrap();
    assert_eq!(result.answer, "It's in main.go");
    assert_eq!(result.references.len(), 1);
    assert_eq!(result.references[0].file_path, "main.go");
    assert_eq!(result.retrieved_snippets[0].text, "func main() {}");
}

#[tokio::test]
async fn ask_end_to_end_renders_citation_line() {
    colored::control::set_override(false);
    let client = client_for(healthy_routes()).await;
    let result = client.ask("Where is main?").await.unwrap();

    let answer = render_markdown(&result.answer);
    assert!(answer.contains("It's in main.go"));

    let citations: Vec<String> = result.references.iter().map(render_reference).collect();
    assert_eq!(citations, vec!["main.go (lines 1–10)".to_string()]);

    let snippet = render_snippet(&result.retrieved_snippets[0], None);
    assert!(snippet.starts_with("main.go  Lines 1–10\n"));
    assert!(snippet.contains("  func main() {}"));
}

#[tokio::test]
async fn index_zip_sends_multipart_file_field() {
    let client = client_for(healthy_routes()).await;

    let dir = tempfile::tempdir().unwrap();
    let zip_path = dir.path().join("project.zip");
    let mut file = std::fs::File::create(&zip_path).unwrap();
    file.write_all(b"PK\x03\x04fake zip bytes").unwrap();

    let resp = client.index_zip(&zip_path).await.unwrap();
    assert_eq!(resp.message, "file:project.zip");
    assert_eq!(resp.chunks, 18); // byte count echoed by the stub
}

#[tokio::test]
async fn index_zip_rejects_non_zip_path_locally() {
    // No backend needed; the client refuses before any I/O.
    let client = ApiClient::with_base_url("http://127.0.0.1:1/api").unwrap();
    let err = client
        .index_zip(std::path::Path::new("notes.txt"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains(".zip"));
}

#[tokio::test]
async fn index_github_roundtrip() {
    let client = client_for(healthy_routes()).await;
    let resp = client
        .index_github("https://github.com/owner/repo")
        .await
        .unwrap();
    assert_eq!(resp.chunks, 42);
}

#[tokio::test]
async fn index_github_bad_url_surfaces_detail() {
    let client = client_for(healthy_routes()).await;
    let err = client.index_github("ftp://nope").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid GitHub URL");
}

#[tokio::test]
async fn refactor_roundtrip() {
    let client = client_for(healthy_routes()).await;
    let resp = client.refactor().await.unwrap();
    assert_eq!(resp.suggestions.len(), 1);
    assert_eq!(resp.suggestions[0].file_path.as_deref(), Some("src/app.py"));
    assert!(resp.message.is_none());
}

#[tokio::test]
async fn history_unwraps_entries() {
    let client = client_for(healthy_routes()).await;
    let entries = client.history().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].question, "Where is main?");
}

#[tokio::test]
async fn plain_text_500_becomes_verbatim_message() {
    let client = client_for(broken_routes()).await;
    let err = client.health().await.unwrap_err();
    assert_eq!(err.to_string(), "internal error");
}

#[tokio::test]
async fn json_404_detail_becomes_message() {
    let client = client_for(broken_routes()).await;
    let err = client.history().await.unwrap_err();
    assert_eq!(err.to_string(), "not found");
}

#[tokio::test]
async fn validation_422_uses_first_msg() {
    let client = client_for(broken_routes()).await;
    let err = client.ask("").await.unwrap_err();
    assert_eq!(err.to_string(), "field required");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let client = ApiClient::with_base_url("http://127.0.0.1:1/api").unwrap();
    let err = client.health().await.unwrap_err();
    assert!(err.to_string().contains("/api/health"));
}
