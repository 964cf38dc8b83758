//! Integration tests for Layer 2: Grammar
//!
//! Tests for the word-to-sentence pipeline: vocabulary loading, staged
//! tokenization, and reduction rules.

mod pipeline;
mod registry;
mod vocabulary;
