//! Getting-started instructions (`cqa guide`).

use colored::Colorize;

pub fn run_guide() {
    println!("{}", "Codebase Q&A with proof".bold());
    println!();
    println!("Index a codebase, then ask questions and get answers grounded in");
    println!("your code with file and line references.");
    println!();
    println!("  1. {}", "Index your code".bold());
    println!("     cqa index zip ./my-project.zip");
    println!("     cqa index github https://github.com/owner/repo");
    println!();
    println!("  2. {}", "Ask questions".bold());
    println!("     cqa ask \"Where is the main entry point?\"");
    println!("     Answers are generated from retrieved snippets only, with");
    println!("     file paths and line ranges as proof.");
    println!();
    println!("  3. {}", "Check status".bold());
    println!("     cqa status verifies backend, vector DB, and LLM connectivity.");
    println!();
    println!("  4. {}", "View history".bold());
    println!("     cqa history shows the last 10 Q&A pairs.");
}
