//! Console, CLI, and serialization for Parley.
//!
//! This crate provides:
//! - [`Repl`] - Interactive console that parses typed chat commands
//! - [`Session`] - Parser plus the game-state snapshot it reads
//! - Snapshot serialization as `MessagePack` or JSON
//! - [`demo_state`] - A built-in snapshot to experiment with

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod demo;
pub mod editor;
pub mod repl;
pub mod serialize;
pub mod session;

pub use demo::demo_state;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Repl, Reply, format_match};
pub use serialize::{Format, from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::Session;

/// Installs the `tracing` subscriber used by the `parley` binary.
///
/// The filter comes from `PARLEY_LOG` and falls back to `default_directive`
/// (e.g. `parley=warn`). Calling it twice is harmless.
pub fn init_tracing(default_directive: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_env("PARLEY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
