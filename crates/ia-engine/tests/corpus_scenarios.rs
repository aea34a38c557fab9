//! End-to-end scenarios against the bundled demo corpora in `data/`.

use ia_core::{Corpus, KnowledgeEntry};
use ia_engine::{Assistant, Engine, EngineConfig, ReplySource, SequenceSource};
use ia_router::Intent;
use std::sync::Arc;

const QA_CORPUS: &str = include_str!("../../../data/qa_corpus.json");
const NORWEGIAN_CORPUS: &str = include_str!("../../../data/norwegian.json");

fn qa_engine() -> Engine {
    let (corpus, report) = Corpus::from_json_str(QA_CORPUS).unwrap();
    assert_eq!(report.skipped, 0);
    Engine::with_defaults(corpus)
}

fn tutor_engine() -> Engine {
    let (corpus, _) = Corpus::from_json_str(NORWEGIAN_CORPUS).unwrap();
    Engine::new(corpus, EngineConfig::language_tutor()).unwrap()
}

// ---- Basic scenarios ----

#[test]
fn test_single_entry_keyword_and_question_hit() {
    let corpus = Corpus::new(vec![KnowledgeEntry::qa(
        "what is a variable",
        &["variable", "var"],
        "A variable stores a value.",
    )]);
    let engine = Engine::with_defaults(corpus);
    let mut rng = SequenceSource::new([0]);
    let reply = engine.reply("tell me about variable", &mut rng);
    assert_eq!(reply.text, "A variable stores a value.");
    assert!(matches!(reply.source, ReplySource::Match { index: 0, .. }));
}

#[test]
fn test_hello_bypasses_scoring() {
    let engine = qa_engine();
    let mut rng = SequenceSource::new([0]);
    let reply = engine.reply("hello", &mut rng);
    assert_eq!(reply.source, ReplySource::Intent { intent: Intent::Greeting });
    assert_eq!(reply.text, EngineConfig::default().assistant.messages.greeting);
}

#[test]
fn test_empty_corpus_unavailable() {
    let engine = Engine::with_defaults(Corpus::empty());
    let mut rng = SequenceSource::new([0]);
    assert!(!engine.is_ready());
    let reply = engine.reply("anything", &mut rng);
    assert_eq!(reply.source, ReplySource::Unavailable);
    assert_eq!(reply.text, EngineConfig::default().assistant.messages.unavailable);
}

// ---- Q&A corpus ----

#[test]
fn test_qa_corpus_loads_all_records() {
    let (corpus, report) = Corpus::from_json_str(QA_CORPUS).unwrap();
    assert_eq!(report.loaded, 6);
    assert_eq!(corpus.len(), 6);
    assert!(corpus.grammar_rules().is_empty());
}

#[test]
fn test_qa_function_question() {
    let engine = qa_engine();
    let mut rng = SequenceSource::new([0]);
    let reply = engine.reply("What is a function?", &mut rng);
    // function exact 3, func partial 1, "what" and "function" in question 2 + 2
    assert_eq!(reply.source, ReplySource::Match { index: 1, score: 8 });
    assert!(reply.text.starts_with("A function is"));
}

#[test]
fn test_qa_queries_with_common_words_reach_scoring() {
    let engine = qa_engine();
    let mut rng = SequenceSource::new([0]);
    let reply = engine.reply("what is this function", &mut rng);
    assert_eq!(reply.source, ReplySource::Match { index: 1, score: 8 });
    let reply = engine.reply("which array method", &mut rng);
    assert_eq!(reply.source, ReplySource::Match { index: 5, score: 5 });
}

#[test]
fn test_qa_plural_forms_match_partially() {
    let engine = qa_engine();
    let mut rng = SequenceSource::new([0]);
    let reply = engine.reply("tell me about arrays and lists", &mut rng);
    assert_eq!(reply.source, ReplySource::Match { index: 5, score: 2 });
}

#[test]
fn test_qa_cyrillic_keyword() {
    let engine = qa_engine();
    let mut rng = SequenceSource::new([0]);
    let reply = engine.reply("Что такое МАССИВ", &mut rng);
    assert_eq!(reply.source, ReplySource::Match { index: 5, score: 3 });
}

#[test]
fn test_qa_unknown_topic_falls_back() {
    let engine = qa_engine();
    let pool = EngineConfig::default().assistant.messages.fallback_pool;
    let mut rng = SequenceSource::new([1]);
    let reply = engine.reply("quantum chromodynamics", &mut rng);
    assert_eq!(reply.source, ReplySource::Fallback);
    assert_eq!(reply.text, pool[1 % pool.len()]);
}

// ---- Vocabulary corpus ----

#[test]
fn test_vocabulary_document_loads_lookups() {
    let (corpus, report) = Corpus::from_json_str(NORWEGIAN_CORPUS).unwrap();
    assert_eq!(report.loaded, 6);
    assert_eq!(report.skipped, 0);
    assert_eq!(corpus.grammar_rules().len(), 1);
    assert_eq!(corpus.category_label("animals"), "Животные");
    assert_eq!(corpus.category_label("abstract"), "abstract");
    assert_eq!(corpus.level_label("intermediate"), "Средний");
}

#[test]
fn test_vocabulary_target_term_lookup() {
    let engine = tutor_engine();
    let mut rng = SequenceSource::new([0]);
    let reply = engine.reply("Собака", &mut rng);
    assert_eq!(reply.source, ReplySource::Match { index: 2, score: 3 });
    assert!(reply.text.contains("**hund** [хунн]"));
    assert!(reply.text.contains("**собака**"));
    assert!(reply.text.contains("• Hunden løper."));
    assert!(reply.text.contains("Категория: Животные"));
    assert!(reply.text.contains("Уровень: Начальный"));
}

#[test]
fn test_vocabulary_extra_keyword_with_yo() {
    let engine = tutor_engine();
    let mut rng = SequenceSource::new([0]);
    let reply = engine.reply("ПЁС!", &mut rng);
    assert_eq!(reply.source, ReplySource::Match { index: 2, score: 3 });
}

#[test]
fn test_norwegian_hei_is_not_an_english_greeting() {
    let engine = tutor_engine();
    let mut rng = SequenceSource::new([0]);
    let reply = engine.reply("Hei", &mut rng);
    assert_eq!(reply.source, ReplySource::Match { index: 0, score: 2 });
    assert!(reply.text.contains("**привет**"));
}

#[test]
fn test_translation_request() {
    let engine = tutor_engine();
    let mut rng = SequenceSource::new([0]);
    let reply = engine.reply("Как сказать «дружба»?", &mut rng);
    assert_eq!(reply.source, ReplySource::Match { index: 5, score: 3 });
    assert!(reply.text.contains("**vennskap**"));
    assert!(reply.text.contains("Категория: abstract"));
    assert!(!reply.text.contains("Пример:"));
}

#[test]
fn test_grammar_request_lists_every_example() {
    let engine = tutor_engine();
    let mut rng = SequenceSource::new([0]);
    let reply = engine.reply("Расскажи про артикли", &mut rng);
    assert_eq!(reply.source, ReplySource::Intent { intent: Intent::GrammarRequest });
    assert!(reply.text.contains("Артикли"));
    for line in ["• en gutt", "• ei jente", "• et hus"] {
        assert!(reply.text.contains(line), "missing {line}");
    }
}

#[test]
fn test_random_word_uses_injected_sequence() {
    let engine = Arc::new(tutor_engine());
    let mut assistant = Assistant::new(engine, SequenceSource::new([3, 4]));
    let first = assistant.reply("Дай слово");
    assert_eq!(first.source, ReplySource::Intent { intent: Intent::RandomWordRequest });
    assert!(first.text.contains("**katt**"));
    let second = assistant.respond("новое слово");
    assert!(second.contains("**bok**"));
}

// ---- Properties ----

#[test]
fn test_ties_keep_earliest_entry() {
    let corpus = Corpus::new(vec![
        KnowledgeEntry::qa("first closure", &["closure"], "first"),
        KnowledgeEntry::qa("second closure", &["closure"], "second"),
        KnowledgeEntry::qa("third closure", &["closure"], "third"),
    ]);
    let engine = Engine::with_defaults(corpus);
    let mut rng = SequenceSource::new([0]);
    for query in ["closure", "explain closure please", "CLOSURE?!"] {
        let reply = engine.reply(query, &mut rng);
        assert_eq!(reply.text, "first", "query {query:?}");
    }
}

#[test]
fn test_respond_is_stable_across_calls() {
    let engine = qa_engine();
    let queries = ["What is CSS?", "react components", "переменная", "html markup"];
    for q in queries {
        let a = engine.respond(q, &mut SequenceSource::new([0]));
        let b = engine.respond(q, &mut SequenceSource::new([0]));
        assert_eq!(a, b);
    }
}
