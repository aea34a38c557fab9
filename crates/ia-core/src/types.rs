use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AssistError, Result};

/// Source/target example sentence attached to a vocabulary item or grammar rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExamplePair {
    #[serde(alias = "no")]
    pub source: String,
    #[serde(alias = "ru")]
    pub target: String,
}

impl ExamplePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self { source: source.into(), target: target.into() }
    }
}

/// Generic question/answer record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QaEntry {
    pub question: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub answer: String,
}

/// Vocabulary item of a language-learning corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabularyEntry {
    #[serde(alias = "norwegian")]
    pub source_term: String,
    #[serde(alias = "russian")]
    pub target_term: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub examples: Vec<ExamplePair>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: String,
    /// Extra search terms beyond the target term.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// One knowledge-base record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KnowledgeEntry {
    Qa(QaEntry),
    Vocabulary(VocabularyEntry),
}

/// Discriminant of [`KnowledgeEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Qa,
    Vocabulary,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Qa => write!(f, "qa"),
            EntryKind::Vocabulary => write!(f, "vocabulary"),
        }
    }
}

/// The view of an entry the scorer works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryProjection<'a> {
    pub primary_text: &'a str,
    pub keywords: Vec<&'a str>,
}

impl KnowledgeEntry {
    pub fn qa(
        question: impl Into<String>,
        keywords: &[&str],
        answer: impl Into<String>,
    ) -> Self {
        KnowledgeEntry::Qa(QaEntry {
            question: question.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            answer: answer.into(),
        })
    }

    pub fn vocabulary(source_term: impl Into<String>, target_term: impl Into<String>) -> VocabularyBuilder {
        VocabularyBuilder::new(source_term, target_term)
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            KnowledgeEntry::Qa(_) => EntryKind::Qa,
            KnowledgeEntry::Vocabulary(_) => EntryKind::Vocabulary,
        }
    }

    /// Text the entry is primarily known by (question or source term).
    pub fn primary_text(&self) -> &str {
        match self {
            KnowledgeEntry::Qa(e) => &e.question,
            KnowledgeEntry::Vocabulary(e) => &e.source_term,
        }
    }

    /// Check required fields. `index` is only used in the error.
    pub fn validate(&self, index: usize) -> Result<()> {
        let missing = match self {
            KnowledgeEntry::Qa(e) if e.question.trim().is_empty() => Some("question is empty"),
            KnowledgeEntry::Qa(e) if e.answer.trim().is_empty() => Some("answer is empty"),
            KnowledgeEntry::Vocabulary(e) if e.source_term.trim().is_empty() => {
                Some("source term is empty")
            }
            KnowledgeEntry::Vocabulary(e) if e.target_term.trim().is_empty() => {
                Some("target term is empty")
            }
            _ => None,
        };
        match missing {
            Some(reason) => Err(AssistError::MalformedEntry { index, reason: reason.into() }),
            None => Ok(()),
        }
    }

    /// Scoring projection, or `None` when the entry is malformed.
    pub fn projection(&self) -> Option<EntryProjection<'_>> {
        if self.validate(0).is_err() {
            return None;
        }
        let projection = match self {
            KnowledgeEntry::Qa(e) => EntryProjection {
                primary_text: &e.question,
                keywords: e.keywords.iter().map(String::as_str).collect(),
            },
            KnowledgeEntry::Vocabulary(e) => EntryProjection {
                primary_text: &e.source_term,
                keywords: std::iter::once(e.target_term.as_str())
                    .chain(e.keywords.iter().map(String::as_str))
                    .collect(),
            },
        };
        Some(projection)
    }
}

/// Builder for vocabulary entries.
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    entry: VocabularyEntry,
}

impl VocabularyBuilder {
    pub fn new(source_term: impl Into<String>, target_term: impl Into<String>) -> Self {
        Self {
            entry: VocabularyEntry {
                source_term: source_term.into(),
                target_term: target_term.into(),
                pronunciation: String::new(),
                examples: Vec::new(),
                category: String::new(),
                level: String::new(),
                keywords: Vec::new(),
            },
        }
    }

    pub fn pronunciation(mut self, p: impl Into<String>) -> Self {
        self.entry.pronunciation = p.into();
        self
    }

    pub fn example(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.entry.examples.push(ExamplePair::new(source, target));
        self
    }

    pub fn category(mut self, c: impl Into<String>) -> Self {
        self.entry.category = c.into();
        self
    }

    pub fn level(mut self, l: impl Into<String>) -> Self {
        self.entry.level = l.into();
        self
    }

    pub fn keyword(mut self, k: impl Into<String>) -> Self {
        self.entry.keywords.push(k.into());
        self
    }

    pub fn build(self) -> KnowledgeEntry {
        KnowledgeEntry::Vocabulary(self.entry)
    }
}

/// Grammar rule served by the grammar intent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrammarRule {
    pub topic: String,
    #[serde(alias = "norwegian_rule")]
    pub rule: String,
    #[serde(alias = "russian_explanation", default)]
    pub explanation: String,
    #[serde(default)]
    pub examples: Vec<ExamplePair>,
}
