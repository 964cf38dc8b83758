//! Session state for the console.
//!
//! The session holds the parser, the current game-state snapshot, and the
//! command prefix typed input is attributed to.

use std::path::Path;

use chrono::Utc;
use parley_foundation::Result;
use parley_fuzzy::{FuzzyParser, TextCommandMatch};
use parley_state::FuzzyState;
use tracing::info;

use crate::demo::demo_state;
use crate::serialize::{load_from_file, save_to_file};

/// One console session.
pub struct Session {
    parser: FuzzyParser,
    state: FuzzyState,
    prefix: String,
    /// When false, `now` is left as loaded so parses are reproducible.
    live_clock: bool,
}

impl Session {
    /// Creates a session over `state`.
    #[must_use]
    pub fn new(parser: FuzzyParser, state: FuzzyState) -> Self {
        Self {
            parser,
            state,
            prefix: "!".to_string(),
            live_clock: true,
        }
    }

    /// Creates a session over the built-in demo snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in vocabulary does not load.
    pub fn demo() -> Result<Self> {
        Ok(Self::new(FuzzyParser::builtin()?, demo_state()))
    }

    /// Sets the prefix reported with every match.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Keeps the snapshot's clock instead of stamping each input with the
    /// current time.
    #[must_use]
    pub const fn with_frozen_clock(mut self) -> Self {
        self.live_clock = false;
        self
    }

    /// The current snapshot.
    #[must_use]
    pub const fn state(&self) -> &FuzzyState {
        &self.state
    }

    /// The parser.
    #[must_use]
    pub const fn parser(&self) -> &FuzzyParser {
        &self.parser
    }

    /// Parses one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is too long or the grammar fails to
    /// settle.
    pub fn parse(&mut self, text: &str) -> Result<Option<TextCommandMatch>> {
        if self.live_clock {
            self.state.now = Utc::now();
        }
        self.parser.parse(&self.prefix, text, &self.state)
    }

    /// Makes the named player the speaker.
    ///
    /// # Errors
    ///
    /// Returns an error if no connected player has that name.
    pub fn set_speaker(&mut self, name: &str) -> Result<()> {
        self.state.set_speaker_by_name(name)
    }

    /// Replaces the snapshot with one read from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        self.state = load_from_file(path)?;
        info!(path = %path.display(), players = self.state.players.len(), "snapshot loaded");
        Ok(())
    }

    /// Writes the snapshot to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        save_to_file(&self.state, path)?;
        info!(path = %path.display(), "snapshot saved");
        Ok(())
    }

    /// Words worth completing: command aliases and player names.
    #[must_use]
    pub fn completions(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .state
            .commands
            .iter()
            .flat_map(|c| c.aliases.iter().cloned())
            .chain(self.state.players.iter().map(|p| p.name_stripped.to_lowercase()))
            .chain(self.state.maps.iter().map(|m| m.friendly_name.to_lowercase()))
            .collect();
        words.sort();
        words.dedup();
        words
    }
}
