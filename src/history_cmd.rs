//! Past Q&A pairs (`cqa history`).
//!
//! The backend keeps the last 10 entries in memory; this prints them oldest
//! first, mirroring the order they were asked.

use anyhow::Result;
use colored::Colorize;

use crate::client::ApiClient;
use crate::config::Config;
use crate::render::{render_markdown, render_reference};

pub async fn run_history(config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;
    let entries = client.history().await?;

    if entries.is_empty() {
        println!("No Q&A history yet. Ask something with `cqa ask`.");
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", "QUESTION".dimmed());
        println!("{}", entry.question);
        println!("{}", "ANSWER".dimmed());
        print!("{}", render_markdown(&entry.answer));
        if !entry.references.is_empty() {
            let refs: Vec<String> = entry.references.iter().map(render_reference).collect();
            println!("References: {}", refs.join("; "));
        }
    }

    Ok(())
}
