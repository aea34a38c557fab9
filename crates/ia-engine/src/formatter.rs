//! Reply templates for matched entries and grammar rules.

use ia_core::config::TemplateLabels;
use ia_core::types::{GrammarRule, VocabularyEntry};
use ia_core::{Corpus, KnowledgeEntry};

#[derive(Debug, Clone, Default)]
pub struct ResponseFormatter {
    labels: TemplateLabels,
}

impl ResponseFormatter {
    pub fn new(labels: TemplateLabels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &TemplateLabels {
        &self.labels
    }

    /// Render a matched entry. Q&A answers are returned verbatim.
    pub fn format_entry(&self, entry: &KnowledgeEntry, corpus: &Corpus) -> String {
        match entry {
            KnowledgeEntry::Qa(qa) => qa.answer.clone(),
            KnowledgeEntry::Vocabulary(v) => self.format_vocabulary(v, corpus),
        }
    }

    /// Term, pronunciation, translation, first example, category and level.
    /// Empty optional fields drop their line.
    pub fn format_vocabulary(&self, item: &VocabularyEntry, corpus: &Corpus) -> String {
        let l = &self.labels;
        let mut out = format!("{} **{}**", l.source_marker, item.source_term);
        if !item.pronunciation.is_empty() {
            out.push_str(&format!(" [{}]", item.pronunciation));
        }
        out.push('\n');
        out.push_str(&format!("{} **{}**\n\n", l.target_marker, item.target_term));

        if let Some(example) = item.examples.first() {
            out.push_str(&format!("📝 **{}:**\n", l.example));
            out.push_str(&format!("• {}\n", example.source));
            out.push_str(&format!("• {}\n\n", example.target));
        }

        if !item.category.is_empty() {
            out.push_str(&format!("📚 {}: {}\n", l.category, corpus.category_label(&item.category)));
        }
        if !item.level.is_empty() {
            out.push_str(&format!("📊 {}: {}\n", l.level, corpus.level_label(&item.level)));
        }
        out.trim_end().to_string()
    }

    /// Topic, rule, explanation and every example pair.
    pub fn format_grammar(&self, rule: &GrammarRule) -> String {
        let l = &self.labels;
        let mut out = format!("📖 **{}: {}**\n\n", l.grammar, rule.topic);
        out.push_str(&format!("{} **{}:** {}\n\n", l.source_marker, l.rule, rule.rule));
        if !rule.explanation.is_empty() {
            out.push_str(&format!("{} **{}:** {}\n\n", l.target_marker, l.explanation, rule.explanation));
        }
        if !rule.examples.is_empty() {
            out.push_str(&format!("📝 **{}:**\n", l.examples));
            for example in &rule.examples {
                out.push_str(&format!("• {} — {}\n", example.source, example.target));
            }
        }
        out.trim_end().to_string()
    }
}
