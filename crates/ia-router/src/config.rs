//! Default intent phrases (Russian and English).

use crate::types::IntentConfig;

fn s(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Default intent configuration.
pub fn default_intent_config() -> IntentConfig {
    IntentConfig {
        random_word: s(&[
            "случайное слово", "дай слово", "новое слово", "изучить слово",
            "random word", "new word", "give me a word",
        ]),
        grammar: s(&[
            "грамматика", "правило", "как образуется", "множественное число", "артикль", "артикли",
            "grammar",
        ]),
        translation: s(&[
            "перевод", "переведи", "как сказать", "что означает", "как будет",
            "translate", "how do you say",
        ]),
        greeting: s(&["привет", "здравствуй", "добро пожаловать", "hello", "good morning"]),
        thanks: s(&["спасибо", "благодарю", "thanks", "thank you"]),
    }
}

/// The default config instance.
pub static INTENT_CONFIG: std::sync::LazyLock<IntentConfig> =
    std::sync::LazyLock::new(default_intent_config);
