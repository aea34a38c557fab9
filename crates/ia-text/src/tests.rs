use crate::*;
use ia_core::config::{CharRange, TextConfig};

// ========== Normalizer ==========

#[test]
fn test_lowercase_and_strip() {
    assert_eq!(normalize("Hello, World!"), "hello world");
}

#[test]
fn test_cyrillic_kept() {
    assert_eq!(normalize("Как сказать «ПРИВЕТ»?"), "как сказать привет");
    assert_eq!(normalize("ЁЛКА"), "ёлка");
}

#[test]
fn test_norwegian_letters_kept() {
    assert_eq!(normalize("Hvordan GÅR det? Ærlig, ØL!"), "hvordan går det ærlig øl");
}

#[test]
fn test_whitespace_collapsed() {
    assert_eq!(normalize("  tell \t me\n\nabout   variable  "), "tell me about variable");
}

#[test]
fn test_underscore_and_digits_kept() {
    assert_eq!(normalize("snake_case v2.0"), "snake_case v20");
}

#[test]
fn test_empty_and_punctuation_only() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("?!... ,,, --"), "");
    assert_eq!(normalize("   "), "");
}

#[test]
fn test_other_scripts_removed() {
    assert_eq!(normalize("hello 世界 мир"), "hello мир");
    assert_eq!(normalize("emoji 🇳🇴 flag"), "emoji flag");
}

#[test]
fn test_idempotent() {
    let samples = [
        "Hello, World!",
        "  Что ОЗНАЧАЕТ  'takk'?? ",
        "İstanbul ΣΊΣΥΦΟΣ straße",
        "a\u{00A0}b\u{2003}c",
        "ÆØÅ æøå ÀÉÎ",
        "",
        "🇳🇴🇷🇺",
    ];
    for s in samples {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
    }
}

#[test]
fn test_custom_alphabet() {
    let config = TextConfig { extra_alphabet: vec![CharRange::new('α', 'ω')] };
    let n = Normalizer::new(&config).unwrap();
    assert_eq!(n.normalize("Γειά σου, привет"), "γει σου");
    assert_eq!(n.alphabet().len(), 1);
}

#[test]
fn test_alphabet_with_regex_metachars() {
    let config = TextConfig { extra_alphabet: vec![CharRange::single('-'), CharRange::single(']')] };
    let n = Normalizer::new(&config).unwrap();
    assert_eq!(n.normalize("e-mail [x]"), "e-mail x]");
}

// ========== Tokenizer ==========

#[test]
fn test_tokenize_min_length() {
    assert_eq!(tokenize_default("tell me about variable"), vec!["tell", "about", "variable"]);
}

#[test]
fn test_tokenize_counts_chars_not_bytes() {
    // "да" is 4 bytes but 2 characters.
    assert_eq!(tokenize("да нет привет", 3), vec!["нет", "привет"]);
}

#[test]
fn test_tokenize_keeps_duplicates_and_order() {
    assert_eq!(tokenize("var var let var", 3), vec!["var", "var", "let", "var"]);
}

#[test]
fn test_tokenize_empty() {
    assert!(tokenize("", 3).is_empty());
    assert!(tokenize("a b c", 3).is_empty());
}

#[test]
fn test_tokenize_never_short() {
    let text = normalize("a bb ccc dddd ee f ggggg ж жж жжж");
    for min in 1..6 {
        assert!(tokenize(&text, min).iter().all(|t| t.chars().count() >= min));
    }
}
