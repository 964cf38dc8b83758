//! Domain binder for Parley.
//!
//! Connects the generic grammar to a live [`FuzzyState`](parley_state::FuzzyState):
//! players, maps, countries, items, and commands are recognized by fuzzy
//! name matching, the primary command is picked out of the sentence, and
//! what remains is assembled into a [`TextCommandMatch`].
//!
//! # Example
//!
//! ```
//! use parley_fuzzy::FuzzyParser;
//! use parley_state::{FuzzyState, Player, TextCommand};
//!
//! let parser = FuzzyParser::builtin().unwrap();
//! let state = FuzzyState::default()
//!     .with_player(Player::new("1", "Phogue"))
//!     .with_command(TextCommand::new("kick").with_alias("kick"));
//!
//! let result = parser.parse("!", "kick phogue", &state).unwrap().unwrap();
//! assert_eq!(result.command().unwrap().canonical_name, "kick");
//! assert_eq!(result.players[0].name, "Phogue");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod command;
pub mod config;
pub mod parser;
pub mod recognizer;
pub mod result;

pub use command::extract_command_list;
pub use config::ParserConfig;
pub use parser::FuzzyParser;
pub use recognizer::{
    StateRecognizer, parse_country_names, parse_item_names, parse_map_names, parse_method,
    parse_player_names,
};
pub use result::TextCommandMatch;
