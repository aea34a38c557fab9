//! Phrase-based intent classification for IntelliAssist.

pub mod types;
pub mod rules;
pub mod config;

pub use types::*;
pub use rules::{classify, classify_with_signal};
pub use config::{default_intent_config, INTENT_CONFIG};

/// Where a query goes next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Answer from the intent's dedicated handler.
    Intent(IntentMatch),
    /// Score against the corpus.
    Search,
}

/// Route normalized input.
pub fn route(normalized: &str, config: &IntentConfig) -> Route {
    match classify_with_signal(normalized, config) {
        Some(m) => Route::Intent(m),
        None => Route::Search,
    }
}
