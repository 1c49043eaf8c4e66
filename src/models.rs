//! Wire-format types mirrored from the backend API.
//!
//! These are the response shapes the backend returns for health, indexing,
//! Q&A, refactor suggestions, and history. They are externally supplied and
//! held only as transient view state for a single command run. Optional
//! fields the backend may omit (`message`, `chunk_count`, suggestion
//! locations) deserialize to `None` rather than failing.

use serde::{Deserialize, Serialize};

/// Response of `GET /health`: overall status plus per-subsystem detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when every subsystem is healthy, otherwise `"degraded"`.
    pub status: String,
    pub backend: SubsystemHealth,
    pub vector_db: SubsystemHealth,
    pub llm: SubsystemHealth,
}

/// Health of a single subsystem (backend, vector DB, or LLM).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubsystemHealth {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Number of indexed chunks; only reported by the vector DB subsystem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_count: Option<u64>,
}

impl SubsystemHealth {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Response of `POST /index/zip` and `POST /index/github`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub status: String,
    pub message: String,
    /// Number of chunks the backend produced from the codebase.
    pub chunks: u64,
}

/// A file/line range citation the answer claims support from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRef {
    pub file_path: String,
    /// 1-based, inclusive. `start_line <= end_line` is assumed, not checked.
    pub start_line: u64,
    pub end_line: u64,
}

/// A citation plus the literal source text supplied to the model as context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedSnippet {
    pub file_path: String,
    pub start_line: u64,
    pub end_line: u64,
    pub text: String,
}

/// Response of `POST /qa`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaResponse {
    /// Markdown answer text, generated from the retrieved snippets.
    pub answer: String,
    #[serde(default)]
    pub references: Vec<SourceRef>,
    #[serde(default)]
    pub retrieved_snippets: Vec<RetrievedSnippet>,
}

/// One entry of `GET /history`: a Q&A response plus the original question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub references: Vec<SourceRef>,
    #[serde(default)]
    pub retrieved_snippets: Vec<RetrievedSnippet>,
}

/// Wrapper shape of `GET /history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// One suggestion of `POST /refactor`. The location fields are only present
/// when the suggestion points at a concrete spot in the codebase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefactorSuggestion {
    pub title: String,
    /// Markdown body of the suggestion.
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_line: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<u64>,
}

/// Response of `POST /refactor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefactorResponse {
    #[serde(default)]
    pub suggestions: Vec<RefactorSuggestion>,
    #[serde(default)]
    pub retrieved_snippets: Vec<RetrievedSnippet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
