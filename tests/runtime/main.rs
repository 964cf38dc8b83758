//! Integration tests for Layer 4: Runtime
//!
//! Tests for snapshot files and the console driven by a scripted editor.

mod console;
mod snapshot;
