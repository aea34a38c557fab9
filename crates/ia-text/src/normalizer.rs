//! Case folding, punctuation stripping and whitespace collapsing.

use ia_core::config::{CharRange, TextConfig};
use ia_core::error::{AssistError, Result};
use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::default);

/// Normalize with the default alphabet.
pub fn normalize(text: &str) -> String {
    DEFAULT_NORMALIZER.normalize(text)
}

/// Text normalizer built from a [`TextConfig`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    disallowed: Regex,
    alphabet: Vec<CharRange>,
}

impl Normalizer {
    pub fn new(config: &TextConfig) -> Result<Self> {
        let disallowed = Regex::new(&disallowed_pattern(&config.extra_alphabet))
            .map_err(|e| AssistError::InvalidConfig(format!("alphabet: {e}")))?;
        Ok(Self { disallowed, alphabet: config.extra_alphabet.clone() })
    }

    pub fn alphabet(&self) -> &[CharRange] {
        &self.alphabet
    }

    /// Lowercase, drop everything outside `[0-9A-Za-z_]`, whitespace and the
    /// extra alphabet, then collapse and trim whitespace.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let lowered = text.to_lowercase();
        let stripped = self.disallowed.replace_all(&lowered, "");
        RE_WHITESPACE.replace_all(&stripped, " ").trim().to_string()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&TextConfig::default()).expect("default alphabet is a valid character class")
    }
}

fn disallowed_pattern(alphabet: &[CharRange]) -> String {
    let mut class = String::from(r"[^0-9A-Za-z_\s");
    for range in alphabet {
        class.push_str(&regex::escape(&range.start.to_string()));
        if range.end != range.start {
            class.push('-');
            class.push_str(&regex::escape(&range.end.to_string()));
        }
    }
    class.push(']');
    class
}
