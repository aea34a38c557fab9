//! Whitespace tokenizer with a minimum token length.

pub use ia_core::config::MIN_TOKEN_LENGTH;

/// Split normalized text on whitespace, keeping tokens of at least
/// `min_length` characters. Order and duplicates are preserved.
pub fn tokenize(normalized: &str, min_length: usize) -> Vec<&str> {
    normalized
        .split_whitespace()
        .filter(|t| t.chars().count() >= min_length)
        .collect()
}

/// [`tokenize`] with [`MIN_TOKEN_LENGTH`].
pub fn tokenize_default(normalized: &str) -> Vec<&str> {
    tokenize(normalized, MIN_TOKEN_LENGTH)
}
