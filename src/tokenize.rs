//! src/tokenize.rs

/// Splits document text into words on maximal runs of whitespace, newlines
/// and tabs included. Pure function of its input; ordering is preserved and
/// re-running it over the same content yields the same sequence.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
