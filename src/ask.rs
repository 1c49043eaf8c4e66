//! Question answering (`cqa ask`).
//!
//! Posts the question, then renders the answer markdown, the citation list,
//! and the retrieved snippets that were sent to the model as context.

use anyhow::{bail, Result};
use colored::Colorize;

use crate::client::ApiClient;
use crate::config::Config;
use crate::render::{render_markdown, render_reference, render_snippet};

pub async fn run_ask(config: &Config, question: &str) -> Result<()> {
    let question = question.trim();
    if question.is_empty() {
        bail!("Please enter a question");
    }

    let client = ApiClient::new(config)?;
    eprintln!("Asking ...");
    let result = client.ask(question).await?;

    println!("{}", "Answer".green().bold());
    println!();
    print!("{}", render_markdown(&result.answer));

    if !result.references.is_empty() {
        println!();
        println!("{}", "Cited in answer".bold());
        for reference in &result.references {
            println!("  - {}", render_reference(reference));
        }
    }

    if !result.retrieved_snippets.is_empty() {
        println!();
        println!("{}", "All context sent to the model".bold());
        for snippet in &result.retrieved_snippets {
            println!();
            print!("{}", render_snippet(snippet, None));
        }
    }

    Ok(())
}
