//! The `respond` pipeline: normalize, route, score or handle the intent, format.

use ia_core::config::AssistantConfig;
use ia_core::error::{AssistError, Result};
use ia_core::Corpus;
use ia_router::{route, Intent, IntentConfig, IntentMatch, Route};
use ia_text::Normalizer;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::fallback::FallbackPolicy;
use crate::formatter::ResponseFormatter;
use crate::random::RandomSource;
use crate::scoring::Scorer;

/// Full engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub assistant: AssistantConfig,
    pub intents: IntentConfig,
}

impl EngineConfig {
    pub fn language_tutor() -> Self {
        Self { assistant: AssistantConfig::language_tutor(), ..Self::default() }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.assistant.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

/// What produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplySource {
    Match { index: usize, score: u32 },
    Intent { intent: Intent },
    Fallback,
    Unavailable,
}

/// A reply plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

impl Reply {
    fn new(text: String, source: ReplySource) -> Self {
        Self { text, source }
    }
}

/// Stateless matching engine over a read-only corpus.
#[derive(Debug, Clone)]
pub struct Engine {
    corpus: Arc<Corpus>,
    normalizer: Normalizer,
    scorer: Scorer,
    formatter: ResponseFormatter,
    fallback: FallbackPolicy,
    intents: IntentConfig,
}

impl Engine {
    pub fn new(corpus: impl Into<Arc<Corpus>>, config: EngineConfig) -> Result<Self> {
        config.assistant.validate()?;
        let normalizer = Normalizer::new(&config.assistant.text)?;
        let corpus = corpus.into();
        tracing::info!(entries = corpus.len(), grammar_rules = corpus.grammar_rules().len(), "engine ready");
        Ok(Self {
            corpus,
            scorer: Scorer::new(normalizer.clone(), config.assistant.scoring),
            formatter: ResponseFormatter::new(config.assistant.labels),
            fallback: FallbackPolicy::new(config.assistant.messages),
            intents: config.intents.normalized(|p| normalizer.normalize(p)),
            normalizer,
        })
    }

    /// Engine with the default configuration.
    pub fn with_defaults(corpus: impl Into<Arc<Corpus>>) -> Self {
        let normalizer = Normalizer::default();
        Self {
            corpus: corpus.into(),
            scorer: Scorer::new(normalizer.clone(), Default::default()),
            formatter: ResponseFormatter::default(),
            fallback: FallbackPolicy::default(),
            intents: IntentConfig::default().normalized(|p| normalizer.normalize(p)),
            normalizer,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// A non-empty corpus is loaded.
    pub fn is_ready(&self) -> bool {
        !self.corpus.is_empty()
    }

    pub fn check_ready(&self) -> Result<&Corpus> {
        if self.corpus.is_empty() {
            return Err(AssistError::EngineUnavailable);
        }
        Ok(&self.corpus)
    }

    /// Reply text for raw user input. Never fails.
    pub fn respond(&self, raw: &str, rng: &mut dyn RandomSource) -> String {
        self.reply(raw, rng).text
    }

    /// Reply with provenance.
    pub fn reply(&self, raw: &str, rng: &mut dyn RandomSource) -> Reply {
        let corpus = match self.check_ready() {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(error = %e, "answering without a corpus");
                return Reply::new(self.fallback.messages().unavailable.clone(), ReplySource::Unavailable);
            }
        };

        let normalized = self.normalizer.normalize(raw);
        match route(&normalized, &self.intents) {
            Route::Intent(m) => self.handle_intent(corpus, &normalized, m, rng),
            Route::Search => {
                let tokens = self.scorer.tokens(&normalized);
                match self.scorer.find_best_tokens(&tokens, corpus) {
                    Some(best) => Reply::new(
                        self.formatter.format_entry(best.entry, corpus),
                        ReplySource::Match { index: best.index, score: best.score },
                    ),
                    None => Reply::new(self.fallback.fallback(None, rng), ReplySource::Fallback),
                }
            }
        }
    }

    fn handle_intent(
        &self,
        corpus: &Corpus,
        normalized: &str,
        m: IntentMatch,
        rng: &mut dyn RandomSource,
    ) -> Reply {
        let intent = m.intent;
        match intent {
            Intent::RandomWordRequest => {
                let index = rng.pick(corpus.len()) % corpus.len();
                let text = match corpus.get(index) {
                    Some(entry) => self.formatter.format_entry(entry, corpus),
                    None => self.fallback.fallback(None, rng),
                };
                Reply::new(text, ReplySource::Intent { intent })
            }
            Intent::GrammarRequest => {
                let text = match corpus.grammar_rules().first() {
                    Some(rule) => self.formatter.format_grammar(rule),
                    None => self.fallback.messages().grammar_unavailable.clone(),
                };
                Reply::new(text, ReplySource::Intent { intent })
            }
            Intent::TranslationRequest => {
                // Score only what follows the request phrase.
                let remainder = normalized.replacen(m.phrase.to_lowercase().as_str(), " ", 1);
                let tokens = self.scorer.tokens(&remainder);
                match self.scorer.find_best_tokens(&tokens, corpus) {
                    Some(best) => Reply::new(
                        self.formatter.format_entry(best.entry, corpus),
                        ReplySource::Match { index: best.index, score: best.score },
                    ),
                    None => Reply::new(self.fallback.fallback(Some(intent), rng), ReplySource::Fallback),
                }
            }
            Intent::Greeting | Intent::Thanks => {
                Reply::new(self.fallback.fallback(Some(intent), rng), ReplySource::Intent { intent })
            }
        }
    }
}
