//! Text preparation for matching: normalization and tokenization.

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{normalize, Normalizer};
pub use tokenizer::{tokenize, tokenize_default, MIN_TOKEN_LENGTH};

#[cfg(test)]
mod tests;
