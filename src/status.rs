//! Backend health dashboard (`cqa status`).
//!
//! Fetches `GET /health` and prints one row per subsystem. The fetch races
//! against Ctrl-C: a response that arrives after cancellation is dropped on
//! the floor instead of being rendered into torn-down output.

use anyhow::Result;

use crate::client::ApiClient;
use crate::config::Config;
use crate::models::SubsystemHealth;
use crate::render::render_status_badge;

pub async fn run_status(config: &Config) -> Result<()> {
    let client = ApiClient::new(config)?;
    eprintln!("Checking {} ...", client.base_url());

    let health = tokio::select! {
        result = client.health() => match result {
            Ok(h) => h,
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!("Ensure the backend is running and reachable at {}.", client.base_url());
                std::process::exit(1);
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Cancelled.");
            return Ok(());
        }
    };

    println!("Overall: {}", render_status_badge(&health.status));
    print_row("Backend", &health.backend);
    print_row("Vector DB", &health.vector_db);
    print_row("LLM", &health.llm);

    Ok(())
}

fn print_row(label: &str, subsystem: &SubsystemHealth) {
    let mut detail = subsystem.message.clone().unwrap_or_default();
    if let Some(count) = subsystem.chunk_count {
        detail.push_str(&format!(" ({} chunks)", count));
    }
    // Pad before coloring; ANSI escapes would throw off column widths.
    let badge = render_status_badge(&format!("{:<6}", subsystem.status));
    println!("  {:<10} {} {}", label, badge, detail.trim());
}
