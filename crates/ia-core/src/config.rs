use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AssistError, Result};

/// Points for a query token equal to a keyword.
pub const EXACT_KEYWORD_POINTS: u32 = 3;
/// Points for a token and keyword where one contains the other.
pub const PARTIAL_KEYWORD_POINTS: u32 = 1;
/// Points for a token found inside the entry's question or term.
pub const PRIMARY_TEXT_POINTS: u32 = 2;
/// Tokens shorter than this many characters never reach the scorer.
pub const MIN_TOKEN_LENGTH: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub text: TextConfig,
    pub scoring: ScoringConfig,
    pub messages: MessageConfig,
    pub labels: TemplateLabels,
}

/// Inclusive character range kept by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharRange {
    pub start: char,
    pub end: char,
}

impl CharRange {
    pub const fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    pub const fn single(c: char) -> Self {
        Self { start: c, end: c }
    }

    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&c)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Characters kept besides ASCII word characters and whitespace.
    pub extra_alphabet: Vec<CharRange>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            extra_alphabet: vec![
                CharRange::new('а', 'я'),
                CharRange::single('ё'),
                CharRange::new('à', 'ö'),
                CharRange::new('ø', 'ÿ'),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub exact_keyword_points: u32,
    pub partial_keyword_points: u32,
    pub primary_text_points: u32,
    pub min_token_length: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            exact_keyword_points: EXACT_KEYWORD_POINTS,
            partial_keyword_points: PARTIAL_KEYWORD_POINTS,
            primary_text_points: PRIMARY_TEXT_POINTS,
            min_token_length: MIN_TOKEN_LENGTH,
        }
    }
}

/// Canned replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    pub greeting: String,
    pub thanks: String,
    pub unavailable: String,
    pub grammar_unavailable: String,
    pub fallback_pool: Vec<String>,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            greeting: "Hi! I'm your web assistant. I can help with questions about programming, \
                       web development and technology. What would you like to know?"
                .into(),
            thanks: "You're welcome! Glad I could help. Feel free to ask anything else!".into(),
            unavailable: "Sorry, the knowledge base is unavailable right now. Please try again later."
                .into(),
            grammar_unavailable: "Sorry, no grammar rules are available yet.".into(),
            fallback_pool: vec![
                "Sorry, I couldn't find an exact answer to your question. Try rephrasing it or ask \
                 about programming, web development or technology."
                    .into(),
                "I specialize in programming, web technologies and IT. Could you ask about one of \
                 those topics?"
                    .into(),
                "Unfortunately I didn't find a suitable answer in my knowledge base. Try asking \
                 about JavaScript, HTML, CSS, React or other technologies."
                    .into(),
                "I couldn't find relevant information for your request. I answer best on web \
                 development, programming and IT."
                    .into(),
            ],
        }
    }
}

impl MessageConfig {
    /// Replies for a Norwegian vocabulary tutor with a Russian-speaking audience.
    pub fn language_tutor() -> Self {
        Self {
            greeting: "Привет! Я помогаю изучать норвежский язык. Напишите слово или попросите \
                       новое слово."
                .into(),
            thanks: "Пожалуйста! Рад был помочь. Если у вас есть еще вопросы, не стесняйтесь \
                     спрашивать!"
                .into(),
            unavailable: "Извините, база данных сейчас недоступна.".into(),
            grammar_unavailable: "Извините, грамматические правила пока не найдены.".into(),
            fallback_pool: vec!["Я помогаю изучать норвежский язык! 🇳🇴\n\n\
                 Вы можете:\n\
                 • Спросить перевод: \"как сказать привет?\"\n\
                 • Попросить случайное слово: \"дай новое слово\"\n\
                 • Узнать грамматику: \"расскажи про артикли\"\n\
                 • Просто написать слово на русском или норвежском\n\n\
                 Попробуйте написать что-то другое, и я постараюсь помочь!"
                .into()],
        }
    }
}

/// Words used by the reply templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateLabels {
    pub source_marker: String,
    pub target_marker: String,
    pub example: String,
    pub examples: String,
    pub category: String,
    pub level: String,
    pub grammar: String,
    pub rule: String,
    pub explanation: String,
}

impl Default for TemplateLabels {
    fn default() -> Self {
        Self {
            source_marker: "🇳🇴".into(),
            target_marker: "🇷🇺".into(),
            example: "Example".into(),
            examples: "Examples".into(),
            category: "Category".into(),
            level: "Level".into(),
            grammar: "Grammar".into(),
            rule: "Rule".into(),
            explanation: "Explanation".into(),
        }
    }
}

impl TemplateLabels {
    pub fn russian() -> Self {
        Self {
            example: "Пример".into(),
            examples: "Примеры".into(),
            category: "Категория".into(),
            level: "Уровень".into(),
            grammar: "Грамматика".into(),
            rule: "Правило".into(),
            explanation: "Объяснение".into(),
            ..Self::default()
        }
    }
}

impl AssistantConfig {
    pub fn language_tutor() -> Self {
        Self {
            messages: MessageConfig::language_tutor(),
            labels: TemplateLabels::russian(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.scoring.min_token_length == 0 {
            return Err(AssistError::InvalidConfig("min_token_length must be at least 1".into()));
        }
        if let Some(r) = self.text.extra_alphabet.iter().find(|r| r.start > r.end) {
            return Err(AssistError::InvalidConfig(format!(
                "alphabet range {:?}-{:?} is reversed",
                r.start, r.end
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}
