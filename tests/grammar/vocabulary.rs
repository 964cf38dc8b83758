//! Integration tests for loading and using a replacement vocabulary.

use parley_grammar::{
    DEFAULT_DOCUMENT, GrammarRegistry, Namespace, ParseContext, PatternCatalog, PatternFamily,
    Sentence, wordify,
};
use parley_state::FuzzyState;

const FRENCH: &str = r#"{
    "Primitive.Numeric": [
        { "regex": "^(?P<value>\\d+)$" },
        { "text": "trois", "value": 3 },
        { "text": "cinq", "value": 5 }
    ],
    "Operator.Arithmetic": [
        { "text": "plus", "name": "Addition" },
        { "text": "fois", "name": "Multiplication" }
    ]
}"#;

fn evaluate(catalog: &PatternCatalog, input: &str) -> Option<f64> {
    let registry = GrammarRegistry::new();
    let state = FuzzyState::default();
    let context = ParseContext::new(&registry, catalog, &state);
    let mut sentence = Sentence::new(input);
    sentence.parse(&context).unwrap();
    (sentence.len() == 1)
        .then(|| sentence.get(0)?.best()?.number())
        .flatten()
}

#[test]
fn replacement_document_drives_parsing() {
    let catalog = PatternCatalog::from_json(FRENCH).unwrap();
    assert_eq!(evaluate(&catalog, "cinq plus trois"), Some(8.0));
    assert_eq!(evaluate(&catalog, "2 fois cinq"), Some(10.0));
    assert_eq!(evaluate(&catalog, "five plus three"), None);
}

#[test]
fn shipped_document_is_the_builtin() {
    let from_text = PatternCatalog::from_json(DEFAULT_DOCUMENT).unwrap();
    let builtin = PatternCatalog::builtin().unwrap();
    assert_eq!(from_text.len(), builtin.len());
    assert_eq!(evaluate(&builtin, "five plus three"), Some(8.0));
}

#[test]
fn misspellings_still_hit() {
    let catalog = PatternCatalog::builtin().unwrap();
    let hits = catalog.hits(PatternFamily::TimeUnit, "minutes");
    assert!(hits.iter().any(|h| h.pattern.name.as_deref() == Some("Minute")));
    assert!(catalog.hits(PatternFamily::TimeUnit, "banana").is_empty());
}

#[test]
fn unusable_documents_are_rejected() {
    assert!(PatternCatalog::from_json("not json").is_err());
    assert!(PatternCatalog::from_json("\"text\"").is_err());
    assert!(PatternCatalog::from_json("{}").unwrap().is_empty());
}

#[test]
fn tokenizing_a_span_runs_every_stage_up_to_the_one_asked() {
    let registry = GrammarRegistry::new();
    let catalog = PatternCatalog::builtin().unwrap();
    let state = FuzzyState::default();
    let context = ParseContext::new(&registry, &catalog, &state);

    assert!(context.tokenize_text(Namespace::Primitive, "plus").is_empty());
    assert!(!context.tokenize_text(Namespace::Operator, "plus").is_empty());
    assert!(!context.tokenize_text(Namespace::Operator, "5").is_empty());
}

#[test]
fn words_split_like_chat() {
    assert_eq!(
        wordify("Kick Phogue, Zaeed!"),
        vec!["kick", "phogue", ",", "zaeed", "!"]
    );
    assert_eq!(wordify("say \"Hello There\""), vec!["say", "\"Hello There\""]);
    assert_eq!(wordify("2.5*(3+1)"), vec!["2.5", "*", "(", "3", "+", "1", ")"]);
    assert_eq!(wordify("at 17:30"), vec!["at", "17:30"]);
    assert_eq!(wordify("ping >= 100"), vec!["ping", ">=", "100"]);
}
