//! Priority-ordered phrase rules.

use crate::types::{Intent, IntentConfig, IntentMatch};

fn first_phrase<'a>(text: &str, phrases: &'a [String]) -> Option<&'a String> {
    phrases
        .iter()
        .filter(|p| !p.is_empty())
        .find(|p| text.contains(p.to_lowercase().as_str()))
}

/// Classify normalized input, returning the intent and its matching phrase.
pub fn classify_with_signal(normalized: &str, config: &IntentConfig) -> Option<IntentMatch> {
    let found = Intent::PRIORITY.iter().find_map(|intent| {
        first_phrase(normalized, config.phrases(*intent)).map(|phrase| IntentMatch {
            intent: *intent,
            phrase: phrase.clone(),
        })
    });
    if let Some(m) = &found {
        tracing::debug!(intent = %m.intent, phrase = %m.phrase, "intent matched");
    }
    found
}

/// Classify normalized input. `None` means "search the corpus".
pub fn classify(normalized: &str, config: &IntentConfig) -> Option<Intent> {
    classify_with_signal(normalized, config).map(|m| m.intent)
}
