//! Fence normalization for LLM-generated markdown.
//!
//! Generated answers sometimes open a fenced code block with the language
//! tag on its own line (a bare "\`\`\`" line followed by a line holding only
//! `python`), which renders the tag as the first code line instead of
//! selecting a language. [`normalize_fences`] folds the tag back onto the
//! fence line. This is a single targeted substitution, not a markdown parser.

use regex::Regex;
use std::sync::LazyLock;

/// Opening fence on its own line, then zero or more blank lines, then a line
/// holding only a language word.
static DANGLING_LANG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^```[ \t]*\n(?:[ \t]*\n)*[ \t]*(\w+)[ \t]*\n").unwrap()
});

/// Rewrite every "```" followed by a bare language line into "```lang".
///
/// Fences that already carry a tag, and untagged fences not followed by a
/// lone word line, pass through unchanged. Applying the function twice
/// yields the same result as applying it once.
pub fn normalize_fences(text: &str) -> String {
    DANGLING_LANG.replace_all(text, "```$1\n").into_owned()
}
