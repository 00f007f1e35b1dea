// Output formatting — terminal display and JSON rendering of results.

pub mod terminal;

use serde::Serialize;

/// Result of comparing two documents (or two words).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub left: String,
    pub right: String,
    /// Similarity of the two frequency profiles, rounded to 2 decimals
    pub similarity: f64,
    /// Highest combined-frequency items, ascending
    pub most_frequent: Vec<String>,
}

/// Render any result as pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Respects UTF-8 character boundaries, unlike byte slicing.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
