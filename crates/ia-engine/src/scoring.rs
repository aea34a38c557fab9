//! Keyword-overlap scoring and best-match selection.
//!
//! Per entry, every query token is compared with every normalized keyword:
//! when one contains the other the pair earns `exact_keyword_points` if they
//! are equal and `partial_keyword_points` otherwise. Every token found inside
//! the normalized primary text earns `primary_text_points`.

use ia_core::config::ScoringConfig;
use ia_core::{Corpus, KnowledgeEntry};
use ia_text::{tokenize, Normalizer};

/// An entry with its score for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate<'a> {
    pub entry: &'a KnowledgeEntry,
    pub index: usize,
    pub score: u32,
}

#[derive(Debug, Clone)]
pub struct Scorer {
    normalizer: Normalizer,
    weights: ScoringConfig,
}

impl Scorer {
    pub fn new(normalizer: Normalizer, weights: ScoringConfig) -> Self {
        Self { normalizer, weights }
    }

    pub fn weights(&self) -> &ScoringConfig {
        &self.weights
    }

    /// Tokens of already-normalized text, filtered by `min_token_length`.
    pub fn tokens<'t>(&self, normalized: &'t str) -> Vec<&'t str> {
        tokenize(normalized, self.weights.min_token_length)
    }

    /// Score one entry. Malformed entries score 0.
    pub fn score(&self, tokens: &[&str], entry: &KnowledgeEntry) -> u32 {
        let Some(projection) = entry.projection() else {
            return 0;
        };
        let keywords: Vec<String> = projection
            .keywords
            .iter()
            .map(|k| self.normalizer.normalize(k))
            .filter(|k| !k.is_empty())
            .collect();

        let mut score = 0;
        for &token in tokens {
            for keyword in &keywords {
                if keyword.contains(token) || token.contains(keyword.as_str()) {
                    score += if keyword.as_str() == token {
                        self.weights.exact_keyword_points
                    } else {
                        self.weights.partial_keyword_points
                    };
                }
            }
        }

        let primary = self.normalizer.normalize(projection.primary_text);
        for &token in tokens {
            if primary.contains(token) {
                score += self.weights.primary_text_points;
            }
        }
        score
    }

    /// Best entry for a raw query; `None` if nothing scores above zero.
    pub fn find_best<'c>(&self, query: &str, corpus: &'c Corpus) -> Option<ScoredCandidate<'c>> {
        let normalized = self.normalizer.normalize(query);
        self.find_best_tokens(&self.tokens(&normalized), corpus)
    }

    /// Scan the corpus in order. Ties keep the earliest entry.
    pub fn find_best_tokens<'c>(&self, tokens: &[&str], corpus: &'c Corpus) -> Option<ScoredCandidate<'c>> {
        if tokens.is_empty() || corpus.is_empty() {
            return None;
        }
        let mut best: Option<ScoredCandidate<'c>> = None;
        let mut best_score = 0;
        for (index, entry) in corpus.iter().enumerate() {
            let score = self.score(tokens, entry);
            if score > best_score {
                best_score = score;
                best = Some(ScoredCandidate { entry, index, score });
            }
        }
        match &best {
            Some(c) => tracing::debug!(index = c.index, score = c.score, kind = %c.entry.kind(), "best match"),
            None => tracing::debug!(tokens = tokens.len(), "no entry scored"),
        }
        best
    }

    /// All entries with a positive score, best first; ties in corpus order.
    pub fn rank<'c>(&self, query: &str, corpus: &'c Corpus) -> Vec<ScoredCandidate<'c>> {
        let normalized = self.normalizer.normalize(query);
        let tokens = self.tokens(&normalized);
        let mut ranked: Vec<ScoredCandidate<'c>> = corpus
            .iter()
            .enumerate()
            .map(|(index, entry)| ScoredCandidate { entry, index, score: self.score(&tokens, entry) })
            .filter(|c| c.score > 0)
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(Normalizer::default(), ScoringConfig::default())
    }
}
