//! Integration tests for whole-sentence parsing without a game state.

use parley_foundation::{TemporalPattern, TimeModifier, TimeRule, TimeUnit};
use parley_grammar::{
    GrammarRegistry, Namespace, ParseContext, PatternCatalog, Recognizer, Sentence, ThingKind,
    Token, TokenVariant, Value,
};
use parley_state::{FuzzyState, Player};

fn parse_with(input: &str, state: &FuzzyState, recognizer: Option<&dyn Recognizer>) -> Sentence {
    let registry = GrammarRegistry::new();
    let catalog = PatternCatalog::builtin().unwrap();
    let mut context = ParseContext::new(&registry, &catalog, state);
    if let Some(recognizer) = recognizer {
        context = context.with_recognizer(recognizer);
    }
    let mut sentence = Sentence::new(input);
    sentence.parse(&context).unwrap();
    sentence
}

fn parse(input: &str) -> Sentence {
    parse_with(input, &FuzzyState::default(), None)
}

fn only_token(sentence: &Sentence) -> &Token {
    assert_eq!(sentence.len(), 1, "expected one phrase in {:?}", sentence.text());
    sentence.get(0).unwrap().best().unwrap()
}

fn only_time(input: &str) -> TemporalPattern {
    let sentence = parse(input);
    *only_token(&sentence).temporal().unwrap()
}

#[test]
fn delay() {
    assert_eq!(
        only_time("in 5 minutes"),
        TemporalPattern::relative(TimeUnit::Minute, 5.0).with_modifier(TimeModifier::Delay)
    );
}

#[test]
fn period() {
    assert_eq!(
        only_time("for 2 hours"),
        TemporalPattern::relative(TimeUnit::Hour, 2.0).with_modifier(TimeModifier::Period)
    );
}

#[test]
fn interval() {
    assert_eq!(
        only_time("every 10 minutes"),
        TemporalPattern::relative(TimeUnit::Minute, 10.0).with_modifier(TimeModifier::Interval)
    );
    assert_eq!(
        only_time("every hour"),
        TemporalPattern::relative(TimeUnit::Hour, 1.0).with_modifier(TimeModifier::Interval)
    );
}

#[test]
fn clock_with_meridiem() {
    let pattern = only_time("at 5 pm");
    assert_eq!(pattern.hour, Some(17));
    assert_eq!(pattern.minute, Some(0));
}

#[test]
fn daily_interval_at_a_clock_time() {
    let pattern = only_time("every day at 5 pm");
    assert_eq!(pattern.modifier, TimeModifier::Interval);
    assert_eq!(pattern.rule, TimeRule::Definitive);
    assert_eq!(pattern.day_offset, Some(1));
    assert_eq!(pattern.hour, Some(17));
    assert_eq!(pattern.minute, Some(0));
}

#[test]
fn meridiem_written_against_the_number() {
    assert_eq!(only_time("every day at 5pm"), only_time("every day at 5 pm"));
    let pattern = only_time("at 5:30pm");
    assert_eq!(pattern.hour, Some(17));
    assert_eq!(pattern.minute, Some(30));
}

#[test]
fn tomorrow_at_a_clock_time() {
    let pattern = only_time("tomorrow at 17:30");
    assert_eq!(pattern.rule, TimeRule::Definitive);
    assert_eq!(pattern.modifier, TimeModifier::None);
    assert_eq!(pattern.day_offset, Some(1));
    assert_eq!((pattern.hour, pattern.minute), (Some(17), Some(30)));
}

#[test]
fn arithmetic_mixes_symbols_and_words() {
    let sentence = parse("2 plus 3 * 4");
    assert_eq!(only_token(&sentence).number(), Some(14.0));

    let sentence = parse("10 minus 4 minus 3");
    assert_eq!(only_token(&sentence).number(), Some(3.0));
}

#[test]
fn division_by_zero_is_left_unreduced() {
    let sentence = parse("5 / 0");
    assert_eq!(sentence.len(), 3);
}

#[test]
fn gibberish_vanishes() {
    assert!(parse("qwzx vbnm zzzt").is_empty());
    assert!(parse("").is_empty());
}

/// Tags exact player names, standing in for the entity recognizer.
struct ExactNames;

impl Recognizer for ExactNames {
    fn recognize(
        &self,
        namespace: Namespace,
        text: &str,
        state: &FuzzyState,
        tokens: &mut Vec<Token>,
    ) {
        if namespace != Namespace::Object {
            return;
        }
        for player in &state.players {
            if player.name.eq_ignore_ascii_case(text) {
                tokens.push(
                    Token::new(TokenVariant::thing(ThingKind::Player), text, 100.0)
                        .with_name(player.name.clone())
                        .with_value(Value::Players(vec![player.clone()])),
                );
            }
        }
    }
}

fn roster() -> FuzzyState {
    FuzzyState::default()
        .with_player(Player::new("1", "Phogue"))
        .with_player(Player::new("2", "Zaeed"))
        .with_player(Player::new("3", "Ike"))
}

fn player_names(sentence: &Sentence) -> Vec<String> {
    let token = only_token(sentence);
    assert_eq!(token.variant, TokenVariant::thing(ThingKind::Player));
    token
        .value
        .as_ref()
        .and_then(Value::as_players)
        .unwrap()
        .iter()
        .map(|p| p.name.clone())
        .collect()
}

#[test]
fn players_joined_by_and() {
    let state = roster();
    let sentence = parse_with("phogue and zaeed", &state, Some(&ExactNames));
    assert_eq!(player_names(&sentence), vec!["Phogue", "Zaeed"]);
}

#[test]
fn players_in_a_list() {
    let state = roster();
    let sentence = parse_with("phogue, zaeed and ike", &state, Some(&ExactNames));
    assert_eq!(player_names(&sentence), vec!["Phogue", "Zaeed", "Ike"]);
}
