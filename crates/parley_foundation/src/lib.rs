//! Core types shared by every Parley layer.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`similarity`] - Fuzzy string similarity scores in the range 0..=100
//! - [`temporal`] - Fuzzy date/time patterns and their resolution against a clock

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod similarity;
pub mod temporal;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use similarity::{de_plural, de_plural_similarity, similarity, subset_bonus_similarity};
pub use temporal::{IntervalSpec, Meridiem, TemporalPattern, TimeModifier, TimeRule, TimeUnit};
