//! Codebase indexing (`cqa index zip` / `cqa index github`).
//!
//! Indexing replaces whatever the backend had indexed before; it reports
//! how many chunks the new codebase produced.

use anyhow::{bail, Result};
use std::path::Path;

use crate::client::ApiClient;
use crate::config::Config;

/// Upload a ZIP archive of a codebase for indexing.
pub async fn run_index_zip(config: &Config, path: &Path) -> Result<()> {
    let client = ApiClient::new(config)?;
    eprintln!("Indexing {} ...", path.display());
    let resp = client.index_zip(path).await?;
    println!("Indexed {} chunks.", resp.chunks);
    Ok(())
}

/// Index a public GitHub repository by URL.
pub async fn run_index_github(config: &Config, repo_url: &str) -> Result<()> {
    let repo_url = repo_url.trim();
    if repo_url.is_empty() {
        bail!("Please enter a GitHub repo URL");
    }

    let client = ApiClient::new(config)?;
    eprintln!("Cloning and indexing {} ...", repo_url);
    let resp = client.index_github(repo_url).await?;
    println!("Indexed {} chunks.", resp.chunks);
    Ok(())
}
