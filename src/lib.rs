//! Parley - fuzzy natural-language commands for game servers
//!
//! This crate re-exports all layers of the Parley system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: parley_runtime    - Console, CLI, snapshot serialization
//! Layer 3: parley_fuzzy      - Domain binder: entity/command recognition, results
//! Layer 2: parley_grammar    - Tokens, phrases, sentences, pattern catalog, rules
//! Layer 1: parley_state      - Game-state snapshot (players, maps, items, commands)
//! Layer 0: parley_foundation - Core types (Error, similarity, temporal patterns)
//! ```

pub use parley_foundation as foundation;
pub use parley_fuzzy as fuzzy;
pub use parley_grammar as grammar;
pub use parley_runtime as runtime;
pub use parley_state as state;
