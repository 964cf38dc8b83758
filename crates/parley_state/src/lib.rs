//! Game-state snapshot read by the Parley engine.
//!
//! The network layer that keeps this state in sync with a live server is not
//! part of Parley. The engine only ever borrows a [`FuzzyState`], so a caller
//! can hand it a snapshot taken between two protocol updates.
//!
//! - [`Player`], [`Map`], [`Item`] - live entities that input can refer to
//! - [`TextCommand`] - a registered command and the aliases that name it
//! - [`FuzzyState`] - everything above plus the speaker and the clock

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod entity;
pub mod state;

pub use command::TextCommand;
pub use entity::{Item, Map, Player};
pub use state::FuzzyState;
