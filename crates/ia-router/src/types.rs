use serde::{Deserialize, Serialize};
use std::fmt;

/// High-level purpose of a query that bypasses keyword scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    RandomWordRequest,
    GrammarRequest,
    TranslationRequest,
    Greeting,
    Thanks,
}

impl Intent {
    /// Classification order; the first intent whose phrases match wins.
    pub const PRIORITY: [Intent; 5] = [
        Intent::RandomWordRequest,
        Intent::GrammarRequest,
        Intent::TranslationRequest,
        Intent::Greeting,
        Intent::Thanks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Intent::RandomWordRequest => "random_word",
            Intent::GrammarRequest => "grammar",
            Intent::TranslationRequest => "translation",
            Intent::Greeting => "greeting",
            Intent::Thanks => "thanks",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classified intent with the phrase that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentMatch {
    pub intent: Intent,
    pub phrase: String,
}

/// Phrase sets per intent. Phrases are matched as substrings of normalized input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentConfig {
    pub random_word: Vec<String>,
    pub grammar: Vec<String>,
    pub translation: Vec<String>,
    pub greeting: Vec<String>,
    pub thanks: Vec<String>,
}

impl Default for IntentConfig {
    fn default() -> Self {
        crate::config::default_intent_config()
    }
}

impl IntentConfig {
    /// Configuration with no phrases; nothing ever classifies.
    pub fn empty() -> Self {
        Self {
            random_word: Vec::new(),
            grammar: Vec::new(),
            translation: Vec::new(),
            greeting: Vec::new(),
            thanks: Vec::new(),
        }
    }

    pub fn phrases(&self, intent: Intent) -> &[String] {
        match intent {
            Intent::RandomWordRequest => &self.random_word,
            Intent::GrammarRequest => &self.grammar,
            Intent::TranslationRequest => &self.translation,
            Intent::Greeting => &self.greeting,
            Intent::Thanks => &self.thanks,
        }
    }

    /// Rewrite every phrase with `f` (normally the input normalizer) so phrases
    /// compare like user input. Phrases that map to empty text are dropped.
    pub fn normalized(self, f: impl Fn(&str) -> String) -> Self {
        let map = |phrases: Vec<String>| -> Vec<String> {
            phrases.iter().map(|p| f(p)).filter(|p| !p.is_empty()).collect()
        };
        Self {
            random_word: map(self.random_word),
            grammar: map(self.grammar),
            translation: map(self.translation),
            greeting: map(self.greeting),
            thanks: map(self.thanks),
        }
    }

    pub fn phrase_count(&self) -> usize {
        Intent::PRIORITY.iter().map(|i| self.phrases(*i).len()).sum()
    }
}
