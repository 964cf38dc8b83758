//! Token model and grammar for Parley.
//!
//! This crate turns text into a reduced [`Sentence`]:
//!
//! 1. [`wordify`] splits input into words, one empty [`Phrase`] each.
//! 2. For every [`Namespace`] in order, each phrase is tokenized against the
//!    [`PatternCatalog`] (plus any [`Recognizer`]s) and neighbouring phrases
//!    are merged when the merged span reads better.
//! 3. The [`GrammarRegistry`]'s reduction rules collapse phrase windows
//!    ("5 + 3", "in 5 minutes", "phogue and zaeed") until none applies.
//!
//! Every input a parse reads is borrowed through a [`ParseContext`], so one
//! registry and catalog can serve any number of concurrent parses.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod class;
pub mod document;
pub mod families;
pub mod pattern;
pub mod phrase;
pub mod registry;
pub mod rules;
pub mod sentence;
pub mod signature;
pub mod token;
pub mod wordify;

pub use class::TokenClass;
pub use document::DEFAULT_DOCUMENT;
pub use families::ParseHandler;
pub use pattern::{MatchPattern, Namespace, PatternCatalog, PatternFamily, PatternHit};
pub use phrase::Phrase;
pub use registry::{GrammarRegistry, ReduceContext, Rule, RuleHandler, Tier};
pub use sentence::{DEFAULT_MAX_REWRITES, ParseContext, Recognizer, Sentence};
pub use signature::{Bound, Parameter, Signature};
pub use token::{
    Adjective, ArithmeticOperator, ArithmeticOrder, Article, EqualityOperator, LogicalOperator,
    NumericProperty, ObjectKind, OperatorKind, Preposition, PrimitiveKind, PropertyCondition,
    Punctuation, SyntaxKind, TemporalKind, ThingKind, Token, TokenVariant, Typography, Value,
};
pub use wordify::wordify;
