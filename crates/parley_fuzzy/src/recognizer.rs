//! Recognizers for the live entities and commands of a game state.
//!
//! The pattern catalog knows the fixed vocabulary ("plus", "minutes",
//! "everyone"). Everything here depends on who is connected and what the
//! server can do, so it is matched against the [`FuzzyState`] of each parse.

use parley_foundation::{de_plural_similarity, similarity, subset_bonus_similarity};
use parley_grammar::{Namespace, Recognizer, ThingKind, Token, TokenVariant, Value};
use parley_state::FuzzyState;

use crate::config::ParserConfig;

/// Feeds entity and command tokens into the object stage of a parse.
#[derive(Clone, Copy, Debug)]
pub struct StateRecognizer<'a> {
    config: &'a ParserConfig,
}

impl<'a> StateRecognizer<'a> {
    /// Creates a recognizer using the thresholds in `config`.
    #[must_use]
    pub fn new(config: &'a ParserConfig) -> Self {
        Self { config }
    }
}

impl Recognizer for StateRecognizer<'_> {
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
        tokens.extend(parse_player_names(self.config, state, text));
        tokens.extend(parse_map_names(self.config, state, text));
        tokens.extend(parse_country_names(self.config, state, text));
        tokens.extend(parse_item_names(self.config, state, text));
        tokens.extend(parse_method(self.config, state, text));
    }
}

/// One player token for every connected player whose name reads like `text`.
///
/// A name is compared in full and with its clan tag stripped, ignoring plural
/// endings. The bar rises with the length of the name, see
/// [`ParserConfig::player_threshold`].
#[must_use]
pub fn parse_player_names(config: &ParserConfig, state: &FuzzyState, text: &str) -> Vec<Token> {
    let max_length = state.max_player_name_length();
    state
        .players
        .iter()
        .filter_map(|player| {
            let stripped = if player.name_stripped.is_empty() {
                &player.name
            } else {
                &player.name_stripped
            };
            let score =
                de_plural_similarity(text, &player.name).max(de_plural_similarity(text, stripped));
            let threshold = config.player_threshold(player.name.chars().count(), max_length);
            (score >= threshold).then(|| {
                Token::new(TokenVariant::thing(ThingKind::Player), text, score)
                    .with_name(player.name.clone())
                    .with_value(Value::Players(vec![player.clone()]))
            })
        })
        .collect()
}

/// One map token for every map whose internal, spoken, or friendly name
/// reads like `text`.
#[must_use]
pub fn parse_map_names(config: &ParserConfig, state: &FuzzyState, text: &str) -> Vec<Token> {
    state
        .maps
        .iter()
        .filter_map(|map| {
            let score = similarity(text, &map.spoken_name())
                .max(similarity(text, &map.friendly_name))
                .max(similarity(text, &map.name));
            (score >= config.map_threshold).then(|| {
                Token::new(TokenVariant::thing(ThingKind::Map), text, score)
                    .with_name(map.name.clone())
                    .with_value(Value::Maps(vec![map.clone()]))
            })
        })
        .collect()
}

/// One location token for every country a connected player is in.
#[must_use]
pub fn parse_country_names(config: &ParserConfig, state: &FuzzyState, text: &str) -> Vec<Token> {
    state
        .countries()
        .into_iter()
        .filter_map(|country| {
            let score = similarity(text, country);
            (score >= config.country_threshold).then(|| {
                Token::new(TokenVariant::thing(ThingKind::Location), text, score)
                    .with_name(country)
                    .with_value(Value::Locations(vec![country.to_string()]))
            })
        })
        .collect()
}

/// A single item token holding every item that reads like `text`.
///
/// Items are matched by name, friendly name, or any tag, so "snipers" picks
/// up every item tagged "sniper". The token is as confident as the best of
/// them.
#[must_use]
pub fn parse_item_names(config: &ParserConfig, state: &FuzzyState, text: &str) -> Option<Token> {
    let mut best = 0.0_f32;
    let mut items = Vec::new();
    for item in &state.items {
        let score = item
            .tags
            .iter()
            .map(|tag| de_plural_similarity(text, tag))
            .fold(
                de_plural_similarity(text, &item.name)
                    .max(de_plural_similarity(text, &item.friendly_name)),
                f32::max,
            );
        if score >= config.item_threshold {
            best = best.max(score);
            items.push(item.clone());
        }
    }
    (!items.is_empty()).then(|| {
        Token::new(TokenVariant::thing(ThingKind::Item), text, best).with_value(Value::Items(items))
    })
}

/// One method token for every command with an alias that reads like `text`.
///
/// Partially typed aliases get a bonus, so "chan" still finds "change map".
#[must_use]
pub fn parse_method(config: &ParserConfig, state: &FuzzyState, text: &str) -> Vec<Token> {
    state
        .commands
        .iter()
        .filter_map(|command| {
            let score = command
                .aliases
                .iter()
                .map(|alias| subset_bonus_similarity(text, alias))
                .fold(0.0_f32, f32::max);
            (score >= config.method_threshold).then(|| {
                Token::new(TokenVariant::METHOD, text, score)
                    .with_name(command.canonical_name.clone())
                    .with_value(Value::Command(command.canonical_name.clone()))
            })
        })
        .collect()
}
