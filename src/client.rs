//! HTTP client for the backend API.
//!
//! [`ApiClient`] wraps one [`reqwest::Client`] plus the configured base URL
//! and exposes the six backend operations as typed methods. All of them
//! share a single request helper that normalizes error bodies (JSON with a
//! `detail` or `message` field, validation arrays of `{msg}` objects, or
//! plain text) into one message string, and degrades gracefully when a
//! success body is empty or not JSON.
//!
//! There are no retries, no caching, and no request coordination: each call
//! is a single fire-and-forget HTTP exchange.

use anyhow::{bail, Context, Result};
use reqwest::multipart;
use std::path::Path;
use std::time::Duration;

use crate::config::Config;
use crate::models::{
    HealthResponse, HistoryEntry, HistoryResponse, IndexResponse, QaResponse, RefactorResponse,
};

/// Body to attach to an outgoing request.
enum RequestBody {
    None,
    Json(serde_json::Value),
    Multipart(multipart::Form),
}

/// Parsed body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// 2xx with an empty body.
    Empty,
    /// 2xx body that parsed as JSON.
    Json(serde_json::Value),
    /// 2xx body that was not JSON; kept verbatim.
    Text(String),
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.api.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            base_url: config.base_url(),
            http: builder.build()?,
        })
    }

    /// Construct against an explicit base URL (tests, ad-hoc use).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::builder().build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ============ Operations ============

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthResponse> {
        self.get_json("/health").await
    }

    /// `POST /index/zip` — upload a codebase archive as multipart field `file`.
    pub async fn index_zip(&self, path: &Path) -> Result<IndexResponse> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .ok_or_else(|| anyhow::anyhow!("Invalid file path: {}", path.display()))?;

        if !file_name.to_lowercase().ends_with(".zip") {
            bail!("Please select a .zip file");
        }

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/zip")?;
        let form = multipart::Form::new().part("file", part);

        let body = self
            .request(reqwest::Method::POST, "/index/zip", RequestBody::Multipart(form))
            .await?;
        decode(body, "/index/zip")
    }

    /// `POST /index/github` — index a public repository by URL.
    pub async fn index_github(&self, repo_url: &str) -> Result<IndexResponse> {
        let body = self
            .request(
                reqwest::Method::POST,
                "/index/github",
                RequestBody::Json(serde_json::json!({ "repo_url": repo_url })),
            )
            .await?;
        decode(body, "/index/github")
    }

    /// `POST /qa` — ask a question about the indexed codebase.
    pub async fn ask(&self, question: &str) -> Result<QaResponse> {
        let body = self
            .request(
                reqwest::Method::POST,
                "/qa",
                RequestBody::Json(serde_json::json!({ "question": question })),
            )
            .await?;
        decode(body, "/qa")
    }

    /// `POST /refactor` — request refactor suggestions. No request body.
    pub async fn refactor(&self) -> Result<RefactorResponse> {
        let body = self
            .request(reqwest::Method::POST, "/refactor", RequestBody::None)
            .await?;
        decode(body, "/refactor")
    }

    /// `GET /history` — last Q&A entries, oldest first.
    pub async fn history(&self) -> Result<Vec<HistoryEntry>> {
        let resp: HistoryResponse = self.get_json("/history").await?;
        Ok(resp.history)
    }

    // ============ Request core ============

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self
            .request(reqwest::Method::GET, path, RequestBody::None)
            .await?;
        decode(body, path)
    }

    /// Issue one request and normalize the response per the backend contract.
    ///
    /// Non-success statuses become an error carrying the message extracted
    /// by [`error_from_body`]. Success bodies are read as text first so a
    /// non-JSON backend still produces a usable value.
    async fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        body: RequestBody,
    ) -> Result<ResponseBody> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, &url);
        req = match body {
            RequestBody::None => req,
            RequestBody::Json(value) => req.json(&value),
            RequestBody::Multipart(form) => req.multipart(form),
        };

        let resp = req
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            bail!("{}", error_from_body(&text));
        }

        Ok(parse_success_body(&text))
    }
}

/// Interpret a successful response body.
pub fn parse_success_body(text: &str) -> ResponseBody {
    if text.is_empty() {
        return ResponseBody::Empty;
    }
    match serde_json::from_str(text) {
        Ok(value) => ResponseBody::Json(value),
        Err(_) => ResponseBody::Text(text.to_string()),
    }
}

/// Extract a single human-readable message from an error response body.
///
/// Preference order: JSON `detail`, then JSON `message`, then the raw text.
/// FastAPI-style validation errors arrive as an array of objects; the first
/// element's `msg` field (or the element itself) is used. Anything that is
/// not JSON comes back verbatim.
pub fn error_from_body(text: &str) -> String {
    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(_) => return text.to_string(),
    };

    let msg = value
        .get("detail")
        .filter(|v| !v.is_null())
        .or_else(|| value.get("message").filter(|v| !v.is_null()));

    match msg {
        Some(serde_json::Value::Array(items)) => match items.first() {
            Some(first) => first
                .get("msg")
                .and_then(|m| m.as_str())
                .map(|m| m.to_string())
                .unwrap_or_else(|| value_as_message(first)),
            None => text.to_string(),
        },
        Some(other) => value_as_message(other),
        None => text.to_string(),
    }
}

/// Render a JSON value as a message: strings unquoted, everything else as
/// compact JSON.
fn value_as_message(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: ResponseBody, path: &str) -> Result<T> {
    match body {
        ResponseBody::Json(value) => serde_json::from_value(value)
            .with_context(|| format!("Unexpected response shape from {}", path)),
        ResponseBody::Empty => bail!("Empty response from {}", path),
        ResponseBody::Text(text) => bail!("Non-JSON response from {}: {}", path, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_prefers_detail_field() {
        assert_eq!(error_from_body(r#"{"detail":"not found"}"#), "not found");
    }

    #[test]
    fn error_falls_back_to_message_field() {
        assert_eq!(
            error_from_body(r#"{"message":"backend down"}"#),
            "backend down"
        );
    }

    #[test]
    fn error_null_detail_falls_through_to_message() {
        assert_eq!(
            error_from_body(r#"{"detail":null,"message":"still here"}"#),
            "still here"
        );
    }

    #[test]
    fn error_validation_array_uses_first_msg() {
        assert_eq!(
            error_from_body(r#"{"detail":[{"msg":"field required"},{"msg":"other"}]}"#),
            "field required"
        );
    }

    #[test]
    fn error_array_without_msg_uses_element() {
        assert_eq!(error_from_body(r#"{"detail":["bad input"]}"#), "bad input");
    }

    #[test]
    fn error_plain_text_verbatim() {
        assert_eq!(error_from_body("internal error"), "internal error");
    }

    #[test]
    fn error_json_without_known_fields_uses_raw_text() {
        let raw = r#"{"code":500}"#;
        assert_eq!(error_from_body(raw), raw);
    }

    #[test]
    fn error_non_string_detail_rendered_as_json() {
        assert_eq!(error_from_body(r#"{"detail":{"code":7}}"#), r#"{"code":7}"#);
    }

    #[test]
    fn success_empty_body_is_empty_marker() {
        assert_eq!(parse_success_body(""), ResponseBody::Empty);
    }

    #[test]
    fn success_json_body_parses() {
        assert_eq!(
            parse_success_body(r#"{"status":"ok"}"#),
            ResponseBody::Json(serde_json::json!({"status":"ok"}))
        );
    }

    #[test]
    fn success_non_json_body_kept_as_text() {
        assert_eq!(
            parse_success_body("plain ok"),
            ResponseBody::Text("plain ok".to_string())
        );
    }
}
