//! The snapshot handed to every parse.

use chrono::{DateTime, Utc};
use parley_foundation::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::command::TextCommand;
use crate::entity::{Item, Map, Player};

/// Everything the engine may read while parsing one input.
///
/// A parse never mutates the state. `now` is part of the snapshot so that
/// temporal expressions resolve the same way every time the same snapshot is
/// parsed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FuzzyState {
    /// The player who typed the input (none when typed at the console)
    #[serde(default)]
    pub speaker: Option<Player>,
    /// Connected players
    #[serde(default)]
    pub players: Vec<Player>,
    /// Maps the server can run
    #[serde(default)]
    pub maps: Vec<Map>,
    /// Known items
    #[serde(default)]
    pub items: Vec<Item>,
    /// Registered text commands
    #[serde(default)]
    pub commands: Vec<TextCommand>,
    /// The moment the input was received
    #[serde(default = "Utc::now")]
    pub now: DateTime<Utc>,
}

impl FuzzyState {
    /// Creates an empty state anchored at `now`.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            speaker: None,
            players: Vec::new(),
            maps: Vec::new(),
            items: Vec::new(),
            commands: Vec::new(),
            now,
        }
    }

    /// Adds a player.
    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    /// Adds a map.
    #[must_use]
    pub fn with_map(mut self, map: Map) -> Self {
        self.maps.push(map);
        self
    }

    /// Adds an item.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Registers a command.
    #[must_use]
    pub fn with_command(mut self, command: TextCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Sets the speaker.
    #[must_use]
    pub fn with_speaker(mut self, speaker: Player) -> Self {
        self.speaker = Some(speaker);
        self
    }

    /// Makes the connected player with this name (case-insensitive) the speaker.
    ///
    /// # Errors
    ///
    /// Returns an error if no connected player has that name.
    pub fn set_speaker_by_name(&mut self, name: &str) -> Result<()> {
        let player = self
            .players
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| Error::unknown_entity("player", name))?;
        self.speaker = Some(player);
        Ok(())
    }

    /// Length in characters of the longest connected player name.
    #[must_use]
    pub fn max_player_name_length(&self) -> usize {
        self.players
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Distinct non-empty country names of connected players, in first-seen order.
    #[must_use]
    pub fn countries(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for player in &self.players {
            let country = player.country_name.as_str();
            if !country.is_empty() && !seen.contains(&country) {
                seen.push(country);
            }
        }
        seen
    }

    /// Finds a command by canonical name.
    #[must_use]
    pub fn command(&self, canonical_name: &str) -> Option<&TextCommand> {
        self.commands
            .iter()
            .find(|c| c.canonical_name == canonical_name)
    }

    /// Finds the first command owning this alias.
    #[must_use]
    pub fn command_by_alias(&self, alias: &str) -> Option<&TextCommand> {
        self.commands.iter().find(|c| c.has_alias(alias))
    }
}

impl Default for FuzzyState {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> FuzzyState {
        FuzzyState::default()
            .with_player(Player::new("1", "Phogue").with_country("Australia", "au"))
            .with_player(Player::new("2", "Zaeed").with_country("Canada", "ca"))
            .with_player(Player::new("3", "Imisnew2").with_country("Australia", "au"))
            .with_command(TextCommand::new("kick").with_alias("kick"))
    }

    #[test]
    fn max_name_length() {
        assert_eq!(state().max_player_name_length(), 8);
    }

    #[test]
    fn countries_are_distinct() {
        assert_eq!(state().countries(), vec!["Australia", "Canada"]);
    }

    #[test]
    fn speaker_by_name() {
        let mut s = state();
        s.set_speaker_by_name("zaeed").unwrap();
        assert_eq!(s.speaker.unwrap().uid, "2");
    }

    #[test]
    fn unknown_speaker_is_error() {
        let mut s = state();
        assert!(s.set_speaker_by_name("Nobody").is_err());
    }

    #[test]
    fn command_lookup_by_alias() {
        let s = state();
        assert_eq!(s.command_by_alias("KICK").unwrap().canonical_name, "kick");
        assert!(s.command("ban").is_none());
    }
}
