//! Registered text commands.

use serde::{Deserialize, Serialize};

/// A command that can be issued in chat or from the console.
///
/// The registry that loads these (and checks who may run them) lives with the
/// caller; the engine only needs the aliases to recognize the command and the
/// priority to order alternates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextCommand {
    /// Canonical command name ("kick", "change_map")
    pub canonical_name: String,
    /// Words or phrases that invoke the command ("kick", "boot", "change map")
    pub aliases: Vec<String>,
    /// Higher priority commands are listed first among alternates
    #[serde(default)]
    pub priority: i32,
}

impl TextCommand {
    /// Creates a command with no aliases.
    #[must_use]
    pub fn new(canonical_name: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            aliases: Vec::new(),
            priority: 0,
        }
    }

    /// Adds an alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Returns true if any alias equals `alias`, ignoring case.
    #[must_use]
    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }
}
