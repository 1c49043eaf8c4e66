//! # Codebase Q&A client
//!
//! CLI client (`cqa`) for a retrieval-augmented codebase question-answering
//! service. The backend owns all retrieval, embedding, vector search, and
//! LLM invocation; this crate is exclusively presentation and HTTP
//! request/response marshalling.
//!
//! ## Quick Start
//!
//! ```bash
//! cqa status                                        # check backend health
//! cqa index zip ./my-project.zip                    # index a codebase
//! cqa index github https://github.com/owner/repo    # or index from GitHub
//! cqa ask "Where is the main entry point?"          # ask, get cited answer
//! cqa refactor                                      # refactor suggestions
//! cqa history                                       # last 10 Q&A pairs
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Wire-format response types |
//! | [`client`] | HTTP client and the six backend operations |
//! | [`markdown`] | Fence normalization for LLM markdown |
//! | [`render`] | Terminal formatting for answers, snippets, citations |
//! | [`status`] | Health dashboard command |
//! | [`index_cmd`] | ZIP / GitHub indexing commands |
//! | [`ask`] | Question answering command |
//! | [`refactor`] | Refactor suggestions command |
//! | [`history_cmd`] | Q&A history command |
//! | [`guide`] | Getting-started text |

pub mod ask;
pub mod client;
pub mod config;
pub mod guide;
pub mod history_cmd;
pub mod index_cmd;
pub mod markdown;
pub mod models;
pub mod refactor;
pub mod render;
pub mod status;
