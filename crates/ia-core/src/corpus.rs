//! Read-only knowledge base: entries plus the lookups replies are rendered with.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{AssistError, Result};
use crate::types::{GrammarRule, KnowledgeEntry};

/// Outcome of a JSON load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    /// Grammar records dropped for failing to decode or validate.
    pub grammar_skipped: usize,
}

/// Ordered, immutable set of knowledge entries.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<KnowledgeEntry>,
    grammar_rules: Vec<GrammarRule>,
    categories: HashMap<String, String>,
    levels: HashMap<String, String>,
}

#[derive(Deserialize)]
struct CorpusDocument {
    #[serde(default, alias = "vocabulary")]
    entries: Vec<Value>,
    #[serde(default)]
    grammar: Vec<Value>,
    #[serde(default)]
    categories: HashMap<String, String>,
    #[serde(default)]
    levels: HashMap<String, String>,
}

impl Corpus {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        Self { entries, ..Self::default() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_grammar_rules(mut self, rules: Vec<GrammarRule>) -> Self {
        self.grammar_rules = rules;
        self
    }

    pub fn with_category(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.categories.insert(key.into(), label.into());
        self
    }

    pub fn with_level(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.levels.insert(key.into(), label.into());
        self
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&KnowledgeEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KnowledgeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn grammar_rules(&self) -> &[GrammarRule] {
        &self.grammar_rules
    }

    /// Display label for a category key, falling back to the key itself.
    pub fn category_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.categories.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Display label for a level key, falling back to the key itself.
    pub fn level_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.levels.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Parse a corpus document or a bare array of entries.
    ///
    /// Records that fail to decode or validate are skipped, not fatal.
    pub fn from_json_str(json: &str) -> Result<(Self, LoadReport)> {
        let value: Value = serde_json::from_str(json)?;
        let doc = match value {
            Value::Array(entries) => CorpusDocument {
                entries,
                grammar: Vec::new(),
                categories: HashMap::new(),
                levels: HashMap::new(),
            },
            Value::Object(map) => serde_json::from_value(Value::Object(map))?,
            other => {
                return Err(AssistError::InvalidConfig(format!(
                    "corpus must be an object or array, got {}",
                    json_type_name(&other)
                )))
            }
        };

        let mut report = LoadReport::default();
        let mut entries = Vec::with_capacity(doc.entries.len());
        for (index, raw) in doc.entries.into_iter().enumerate() {
            match decode_entry(index, raw) {
                Ok(entry) => {
                    entries.push(entry);
                    report.loaded += 1;
                }
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping corpus record");
                    report.skipped += 1;
                }
            }
        }

        let mut grammar_rules = Vec::with_capacity(doc.grammar.len());
        for (index, raw) in doc.grammar.into_iter().enumerate() {
            match decode_grammar_rule(index, raw) {
                Ok(rule) => grammar_rules.push(rule),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping grammar record");
                    report.grammar_skipped += 1;
                }
            }
        }

        tracing::info!(
            loaded = report.loaded,
            skipped = report.skipped,
            grammar_rules = grammar_rules.len(),
            grammar_skipped = report.grammar_skipped,
            "corpus loaded"
        );

        let corpus = Self {
            entries,
            grammar_rules,
            categories: doc.categories,
            levels: doc.levels,
        };
        Ok((corpus, report))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<(Self, LoadReport)> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a KnowledgeEntry;
    type IntoIter = std::slice::Iter<'a, KnowledgeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn decode_entry(index: usize, mut raw: Value) -> Result<KnowledgeEntry> {
    let obj = raw.as_object_mut().ok_or_else(|| AssistError::MalformedEntry {
        index,
        reason: "record is not an object".into(),
    })?;
    if !obj.contains_key("kind") {
        let kind = if obj.contains_key("question") {
            "qa"
        } else if obj.contains_key("source_term") || obj.contains_key("norwegian") {
            "vocabulary"
        } else {
            return Err(AssistError::MalformedEntry {
                index,
                reason: "cannot infer entry kind".into(),
            });
        };
        obj.insert("kind".into(), Value::String(kind.into()));
    }
    let entry: KnowledgeEntry = serde_json::from_value(raw)
        .map_err(|e| AssistError::MalformedEntry { index, reason: e.to_string() })?;
    entry.validate(index)?;
    Ok(entry)
}

fn decode_grammar_rule(index: usize, raw: Value) -> Result<GrammarRule> {
    let rule: GrammarRule = serde_json::from_value(raw)
        .map_err(|e| AssistError::MalformedEntry { index, reason: e.to_string() })?;
    if rule.topic.trim().is_empty() || rule.rule.trim().is_empty() {
        return Err(AssistError::MalformedEntry { index, reason: "grammar topic or rule is empty".into() });
    }
    Ok(rule)
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
