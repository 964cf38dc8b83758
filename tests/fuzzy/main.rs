//! Integration tests for Layer 3: Fuzzy binding
//!
//! End-to-end parses against a populated server: command selection,
//! entity arguments, and the properties every parse must keep.

mod arguments;
mod commands;
mod properties;

use parley_fuzzy::{FuzzyParser, TextCommandMatch};
use parley_runtime::demo_state;

/// Parses against the demo server, expecting a match.
pub fn parse(input: &str) -> TextCommandMatch {
    try_parse(input).unwrap_or_else(|| panic!("no match for {input:?}"))
}

/// Parses against the demo server.
pub fn try_parse(input: &str) -> Option<TextCommandMatch> {
    let parser = FuzzyParser::builtin().unwrap();
    parser.parse("!", input, &demo_state()).unwrap()
}

/// Names of the players a match refers to.
pub fn player_names(result: &TextCommandMatch) -> Vec<&str> {
    result.players.iter().map(|p| p.name.as_str()).collect()
}
