//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Error, string similarity, and temporal patterns.

mod errors;
mod similarity;
mod temporal;
