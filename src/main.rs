//! # Codebase Q&A CLI (`cqa`)
//!
//! The `cqa` binary is the client for a retrieval-augmented codebase Q&A
//! service. It provides commands for indexing a codebase (ZIP upload or
//! GitHub URL), asking questions with cited answers, fetching refactor
//! suggestions, viewing Q&A history, and checking backend health.
//!
//! ## Usage
//!
//! ```bash
//! cqa --config ./config/cqa.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cqa guide` | Print getting-started instructions |
//! | `cqa status` | Check backend, vector DB, and LLM health |
//! | `cqa index zip <FILE>` | Upload and index a ZIP of a codebase |
//! | `cqa index github <URL>` | Clone and index a public GitHub repo |
//! | `cqa ask "<question>"` | Ask a question, get a cited answer |
//! | `cqa refactor` | Generate refactor suggestions |
//! | `cqa history` | Show the last 10 Q&A pairs |

mod ask;
mod client;
mod config;
mod guide;
mod history_cmd;
mod index_cmd;
mod markdown;
mod models;
mod refactor;
mod render;
mod status;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Codebase Q&A client — ask questions about an indexed codebase and get
/// answers with file/line citations.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file; when the file is missing, built-in defaults targeting a local
/// backend are used. The `CQA_API_URL` environment variable overrides the
/// configured base URL.
#[derive(Parser)]
#[command(
    name = "cqa",
    about = "Codebase Q&A — ask questions about your code with file/line citations",
    version,
    long_about = "Client for a retrieval-augmented codebase Q&A service. Index a codebase \
    (ZIP upload or public GitHub repo), then ask natural-language questions; answers are \
    generated from retrieved code snippets only and cite the file paths and line ranges \
    they rely on. Retrieval, embedding, and LLM invocation all happen in the backend."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/cqa.toml`; a missing file falls back to
    /// built-in defaults (`http://127.0.0.1:8000/api`).
    #[arg(long, global = true, default_value = "./config/cqa.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Print getting-started instructions.
    Guide,

    /// Check backend health.
    ///
    /// Fetches the health of the backend, the vector database (including
    /// the indexed chunk count), and the LLM connection, and prints one
    /// row per subsystem.
    Status,

    /// Index a codebase so it can be asked about.
    ///
    /// Indexing replaces the previously indexed codebase on the backend.
    Index {
        #[command(subcommand)]
        source: IndexSource,
    },

    /// Ask a question about the indexed codebase.
    ///
    /// Prints the generated answer, the file/line citations backing it,
    /// and the retrieved snippets that were sent to the model as context.
    Ask {
        /// The question text.
        question: String,
    },

    /// Generate refactor suggestions for the indexed codebase.
    Refactor,

    /// Show the last 10 Q&A pairs, oldest first.
    History,
}

/// Where to index the codebase from.
#[derive(Subcommand)]
enum IndexSource {
    /// Upload a ZIP archive of the codebase.
    Zip {
        /// Path to a `.zip` file.
        file: PathBuf,
    },

    /// Clone and index a public GitHub repository.
    Github {
        /// Repository URL, e.g. `https://github.com/owner/repo`.
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `guide` needs no config or network.
    if let Commands::Guide = cli.command {
        guide::run_guide();
        return Ok(());
    }

    let cfg = if cli.config.exists() {
        config::load_config(&cli.config)?
    } else {
        config::Config::minimal()
    };

    match cli.command {
        Commands::Guide => unreachable!(),
        Commands::Status => {
            status::run_status(&cfg).await?;
        }
        Commands::Index { source } => match source {
            IndexSource::Zip { file } => {
                index_cmd::run_index_zip(&cfg, &file).await?;
            }
            IndexSource::Github { url } => {
                index_cmd::run_index_github(&cfg, &url).await?;
            }
        },
        Commands::Ask { question } => {
            ask::run_ask(&cfg, &question).await?;
        }
        Commands::Refactor => {
            refactor::run_refactor(&cfg).await?;
        }
        Commands::History => {
            history_cmd::run_history(&cfg).await?;
        }
    }

    Ok(())
}
