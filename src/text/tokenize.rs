// Word tokenization over normalized text.

/// Split text into words on runs of whitespace, dropping empty fragments.
pub fn text_to_list(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
