//! Integration tests for rule registration and reduction order.

use parley_grammar::{
    Bound, GrammarRegistry, ParseContext, PatternCatalog, PatternFamily, Phrase, ReduceContext,
    Rule, Sentence, Signature, Tier, Token, TokenClass, TokenVariant, Value,
};
use parley_state::FuzzyState;
use proptest::prelude::*;

fn constant(bound: &Bound<'_>, value: f64) -> Token {
    bound
        .produce(TokenVariant::NUMERIC)
        .with_value(Value::Number(value))
}

fn one(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    Some(constant(bound, 1.0))
}

fn two(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    Some(constant(bound, 2.0))
}

fn three(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    Some(constant(bound, 3.0))
}

fn zero(_: &ReduceContext<'_>, bound: &Bound<'_>) -> Option<Token> {
    Some(constant(bound, 0.0))
}

fn numbers(id: &'static str, count: usize) -> Signature {
    (0..count).fold(Signature::new(id), |signature, _| {
        signature.param("n", TokenClass::NUMERIC)
    })
}

/// A registry that only knows digits.
fn digits_only() -> GrammarRegistry {
    let numeric = GrammarRegistry::new()
        .parser(PatternFamily::Numeric)
        .unwrap();
    GrammarRegistry::empty().with_parser(PatternFamily::Numeric, numeric)
}

fn reduce_to_number(registry: &GrammarRegistry, input: &str) -> Option<f64> {
    let catalog = PatternCatalog::builtin().unwrap();
    let state = FuzzyState::default();
    let context = ParseContext::new(registry, &catalog, &state);
    let mut sentence = Sentence::new(input);
    sentence.parse(&context).unwrap();
    (sentence.len() == 1)
        .then(|| sentence.get(0)?.best()?.number())
        .flatten()
}

#[test]
fn earlier_registration_wins_a_tie() {
    let registry = digits_only()
        .with_rule(Rule::new(Tier::General, numbers("first", 2), one))
        .with_rule(Rule::new(Tier::General, numbers("second", 2), two));
    assert_eq!(reduce_to_number(&registry, "4 4"), Some(1.0));
}

#[test]
fn shorter_windows_go_first() {
    let registry = digits_only()
        .with_rule(Rule::new(Tier::General, numbers("triple", 3), three))
        .with_rule(Rule::new(Tier::General, numbers("pair", 2), two));
    assert_eq!(reduce_to_number(&registry, "7 7 7"), Some(2.0));
}

#[test]
fn earlier_tiers_go_first() {
    let registry = digits_only()
        .with_rule(Rule::new(Tier::General, numbers("late", 2), two))
        .with_rule(Rule::new(Tier::Combine, numbers("early", 2), one));
    assert_eq!(reduce_to_number(&registry, "7 7"), Some(1.0));
}

#[test]
fn same_id_replaces_in_place() {
    let shipped = GrammarRegistry::new();
    let before = shipped.rules().len();
    let position = shipped
        .rules()
        .iter()
        .position(|r| r.id() == "third-order")
        .unwrap();

    let registry = shipped.with_rule(Rule::new(
        Tier::ThirdOrder,
        Signature::new("third-order")
            .param("left", TokenClass::NUMERIC)
            .param("operator", TokenClass::ThirdOrder)
            .param("right", TokenClass::NUMERIC),
        zero,
    ));

    assert_eq!(registry.rules().len(), before);
    assert_eq!(registry.rules()[position].id(), "third-order");
    assert_eq!(reduce_to_number(&registry, "5 + 3"), Some(0.0));
    assert_eq!(reduce_to_number(&registry, "5 * 3"), Some(15.0));
}

#[test]
fn shipped_rules_are_well_formed() {
    let registry = GrammarRegistry::new();
    for rule in registry.rules() {
        assert!(!rule.signature.is_empty(), "{} takes nothing", rule.id());
        assert_eq!(registry.rule(rule.id()).map(Rule::id), Some(rule.id()));
    }
    for tier in Tier::ALL {
        let lengths = registry.window_lengths(tier);
        assert!(lengths.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn empty_registry_recognizes_nothing() {
    let registry = GrammarRegistry::empty();
    let catalog = PatternCatalog::builtin().unwrap();
    let state = FuzzyState::default();
    let context = ParseContext::new(&registry, &catalog, &state);
    let mut sentence = Sentence::new("kick 5 players");
    sentence.parse(&context).unwrap();
    assert!(sentence.is_empty());
}

fn number_phrase(value: f64) -> Phrase {
    Phrase::of_token(
        value.to_string(),
        Token::new(TokenVariant::NUMERIC, value.to_string(), 100.0)
            .with_value(Value::Number(value)),
    )
}

proptest! {
    #[test]
    fn windows_of_the_wrong_length_never_bind(extra in 1usize..4, shorter in any::<bool>()) {
        let registry = GrammarRegistry::new();
        for rule in registry.rules() {
            let arity = rule.signature.len();
            let length = if shorter { arity.saturating_sub(extra) } else { arity + extra };
            if length == arity {
                continue;
            }
            let phrases: Vec<Phrase> = (0..length).map(|i| number_phrase(i as f64)).collect();
            let window: Vec<&Phrase> = phrases.iter().collect();
            prop_assert!(rule.signature.bind(&window).is_none(), "{} bound {length}", rule.id());
        }
    }
}
