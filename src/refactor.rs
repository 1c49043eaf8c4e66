//! Refactor suggestions (`cqa refactor`).

use anyhow::Result;
use colored::Colorize;

use crate::client::ApiClient;
use crate::config::Config;
use crate::models::RefactorSuggestion;
use crate::render::render_markdown;

pub async fn run_refactor(config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;
    eprintln!("Generating refactor suggestions ...");
    let resp = client.refactor().await?;

    if let Some(ref message) = resp.message {
        println!("{}", message);
        println!();
    }

    if resp.suggestions.is_empty() {
        println!("No suggestions.");
        return Ok(());
    }

    for (i, suggestion) in resp.suggestions.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}{}", suggestion.title.bold(), location_suffix(suggestion));
        print!("{}", render_markdown(&suggestion.description));
    }

    Ok(())
}

/// ` — file (lines a–b)` when the suggestion carries a location.
fn location_suffix(suggestion: &RefactorSuggestion) -> String {
    match (&suggestion.file_path, suggestion.start_line, suggestion.end_line) {
        (Some(path), Some(start), Some(end)) => {
            format!("  {} (lines {}–{})", path.cyan(), start, end)
        }
        (Some(path), _, _) => format!("  {}", path.cyan()),
        _ => String::new(),
    }
}
