//! Properties every parse keeps, whatever the input.

use std::collections::BTreeSet;
use std::thread;

use parley_foundation::ErrorKind;
use parley_fuzzy::{
    FuzzyParser, ParserConfig, parse_country_names, parse_item_names, parse_map_names,
    parse_method, parse_player_names,
};
use parley_grammar::{PatternCatalog, Token};
use parley_runtime::demo_state;
use parley_state::FuzzyState;
use proptest::prelude::*;

use crate::{parse, player_names};

const WORDS: &[&str] = &[
    "kick", "ban", "slay", "change", "map", "phogue", "zaeed", "ike", "me", "and", "or", ",",
    "everyone", "except", "with", "from", "canada", "m95", "in", "for", "every", "5", "10",
    "minutes", "hours", "plus", "*", "(", ")", "port", "valdez", "the", "at", "pm", "ping",
    ">", "100", "xyzzy",
];

fn names(tokens: &[Token]) -> BTreeSet<String> {
    tokens.iter().filter_map(|t| t.name.clone()).collect()
}

fn item_names(token: Option<Token>) -> BTreeSet<String> {
    match token.and_then(|t| t.value) {
        Some(parley_grammar::Value::Items(items)) => items.into_iter().map(|i| i.name).collect(),
        _ => BTreeSet::new(),
    }
}

/// Every entity name each recognizer accepts for `text`.
fn accepted(config: &ParserConfig, state: &FuzzyState, text: &str) -> Vec<BTreeSet<String>> {
    vec![
        names(&parse_player_names(config, state, text)),
        names(&parse_map_names(config, state, text)),
        names(&parse_country_names(config, state, text)),
        names(&parse_method(config, state, text)),
        item_names(parse_item_names(config, state, text)),
    ]
}

#[test]
fn exact_names_score_full_and_rank_first() {
    let state = demo_state();
    let config = ParserConfig::default();
    for player in &state.players {
        let tokens = parse_player_names(&config, &state, &player.name.to_lowercase());
        let best = tokens
            .iter()
            .max_by(|a, b| a.similarity().total_cmp(&b.similarity()))
            .unwrap();
        assert_eq!(best.name.as_deref(), Some(player.name.as_str()));
        assert!((best.similarity() - 100.0).abs() < f32::EPSILON);
    }
}

#[test]
fn every_player_can_be_named_back() {
    let state = demo_state();
    for player in &state.players {
        let result = parse(&format!("kick {}", player.name));
        assert_eq!(player_names(&result), vec![player.name.as_str()]);
    }
}

#[test]
fn reparsing_the_canonical_form_is_stable() {
    let first = parse("boot phogeu in 5 minutes");
    let canonical = format!(
        "{} {} in 5 minutes",
        first.command().unwrap().aliases[0],
        first.players[0].name
    );
    let second = parse(&canonical);
    assert_eq!(second.commands, first.commands);
    assert_eq!(second.players, first.players);
    assert_eq!(second.delay, first.delay);
}

#[test]
fn long_input_is_refused() {
    let parser = FuzzyParser::builtin().unwrap();
    let input = vec!["kick"; 49].join(" ");
    let err = parser.parse("!", &input, &demo_state()).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InputTooLong {
            words: 49,
            limit: 48
        }
    ));
}

#[test]
fn one_parser_serves_many_threads() {
    let parser = FuzzyParser::builtin().unwrap();
    let state = demo_state();
    let expected = parser.parse("!", "kick phogue and zaeed", &state).unwrap();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| parser.parse("!", "kick phogue and zaeed", &state).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn stricter_vocabulary_still_parses_exact_input() {
    let parser = FuzzyParser::new(PatternCatalog::builtin().unwrap(), ParserConfig::strict());
    let result = parser
        .parse("!", "kick phogue", &demo_state())
        .unwrap()
        .unwrap();
    assert_eq!(player_names(&result), vec!["Phogue"]);
    assert!(
        parser
            .parse("!", "kick phgeu", &demo_state())
            .unwrap()
            .is_none_or(|r| r.players.is_empty())
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn parsing_is_deterministic(words in prop::collection::vec(prop::sample::select(WORDS), 0..8)) {
        let parser = FuzzyParser::builtin().unwrap();
        let state = demo_state();
        let input = words.join(" ");
        let first = parser.parse("!", &input, &state).ok();
        let second = parser.parse("!", &input, &state).ok();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tighter_thresholds_accept_less(text in "[a-z0-9 ]{1,12}") {
        let state = demo_state();
        let strict = accepted(&ParserConfig::strict(), &state, &text);
        let default = accepted(&ParserConfig::default(), &state, &text);
        let lenient = accepted(&ParserConfig::lenient(), &state, &text);
        for ((s, d), l) in strict.iter().zip(&default).zip(&lenient) {
            prop_assert!(s.is_subset(d));
            prop_assert!(d.is_subset(l));
        }
    }
}
