//! Terminal rendering for answers, snippets, and citations.
//!
//! Pure formatters: every function returns a `String` that the command
//! modules print. Colors come from `colored`, which turns itself off when
//! stdout is not a terminal, so piped output stays plain.

use colored::Colorize;

use crate::markdown::normalize_fences;
use crate::models::{RetrievedSnippet, SourceRef};

/// Map a file extension to the language tag shown on snippet frames.
///
/// Unknown extensions fall back to `text`.
pub fn language_for_path(file_path: &str) -> &'static str {
    let ext = file_path
        .rsplit('.')
        .next()
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "py" => "python",
        "js" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "rs" => "rust",
        "go" => "go",
        "json" => "json",
        "md" => "markdown",
        "sh" => "bash",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "html" => "html",
        "css" => "css",
        _ => "text",
    }
}

/// One citation line: `main.go (lines 1–10)`.
pub fn render_reference(reference: &SourceRef) -> String {
    format!(
        "{} (lines {}–{})",
        reference.file_path.cyan(),
        reference.start_line,
        reference.end_line
    )
}

/// A retrieved snippet: header with file path and 1-based inclusive line
/// range, then the source text framed as a code block.
///
/// `language` overrides the extension-based tag when given.
pub fn render_snippet(snippet: &RetrievedSnippet, language: Option<&str>) -> String {
    let lang = language.unwrap_or_else(|| language_for_path(&snippet.file_path));
    let mut out = String::new();
    out.push_str(&format!(
        "{}  Lines {}–{}\n",
        snippet.file_path.cyan().bold(),
        snippet.start_line,
        snippet.end_line
    ));
    out.push_str(&frame_code(&snippet.text, lang));
    out
}

/// Render markdown for the terminal.
///
/// Fence tags are normalized first (see [`normalize_fences`]), then fenced
/// code blocks are framed with their language tag; headings are bolded;
/// all other lines pass through verbatim.
pub fn render_markdown(text: &str) -> String {
    let normalized = normalize_fences(text);
    let mut out = String::new();
    let mut code_lines: Vec<&str> = Vec::new();
    let mut code_lang: Option<String> = None;
    let mut in_code = false;

    for line in normalized.lines() {
        if let Some(rest) = line.strip_prefix("```") {
            if in_code {
                out.push_str(&frame_code(&code_lines.join("\n"), code_lang.as_deref().unwrap_or("text")));
                code_lines.clear();
                in_code = false;
            } else {
                let tag = rest.trim();
                code_lang = if tag.is_empty() { None } else { Some(tag.to_string()) };
                in_code = true;
            }
            continue;
        }
        if in_code {
            code_lines.push(line);
        } else if line.starts_with('#') {
            out.push_str(&format!("{}\n", line.trim_start_matches('#').trim().bold()));
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }

    // Unterminated fence: emit what was collected rather than dropping it.
    if in_code && !code_lines.is_empty() {
        out.push_str(&frame_code(&code_lines.join("\n"), code_lang.as_deref().unwrap_or("text")));
    }

    out
}

/// Frame code for the terminal: a dimmed rule carrying the language tag,
/// the code indented two spaces, and a closing rule.
fn frame_code(code: &str, lang: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", format!("--- {} ---", lang).dimmed()));
    for line in code.lines() {
        out.push_str(&format!("  {}\n", line));
    }
    out.push_str(&format!("{}\n", "---".dimmed()));
    out
}

/// Status badge for health output: `ok` green, anything else red.
pub fn render_status_badge(status: &str) -> String {
    if status.trim() == "ok" {
        status.green().bold().to_string()
    } else {
        status.red().bold().to_string()
    }
}
