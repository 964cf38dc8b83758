//! Tunables of the domain binder.

use parley_grammar::DEFAULT_MAX_REWRITES;

/// Similarity thresholds and limits used when binding input to game state.
///
/// All thresholds are on the 0..=100 similarity scale.
#[derive(Clone, Debug, PartialEq)]
pub struct ParserConfig {
    /// Player threshold for the shortest names.
    pub player_threshold_lower: f32,

    /// Player threshold for the longest connected name.
    pub player_threshold_upper: f32,

    /// Minimum similarity for a map.
    pub map_threshold: f32,

    /// Minimum similarity for a country.
    pub country_threshold: f32,

    /// Minimum similarity for an item.
    pub item_threshold: f32,

    /// Minimum similarity for a command alias.
    pub method_threshold: f32,

    /// Minimum similarity for a command sharing the primary command's words
    /// to be kept as an alternate.
    pub alternate_method_threshold: f32,

    /// Longest input accepted, in words.
    pub max_words: usize,

    /// Rewrite budget for each refactor and reduce loop.
    pub max_rewrites: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            player_threshold_lower: 55.0,
            player_threshold_upper: 70.0,
            map_threshold: 60.0,
            country_threshold: 60.0,
            item_threshold: 60.0,
            method_threshold: 60.0,
            alternate_method_threshold: 80.0,
            max_words: 48,
            max_rewrites: DEFAULT_MAX_REWRITES,
        }
    }
}

impl ParserConfig {
    /// A configuration that only accepts close matches.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            player_threshold_lower: 70.0,
            player_threshold_upper: 85.0,
            map_threshold: 75.0,
            country_threshold: 75.0,
            item_threshold: 75.0,
            method_threshold: 75.0,
            alternate_method_threshold: 90.0,
            ..Self::default()
        }
    }

    /// A configuration that tolerates heavy misspelling.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            player_threshold_lower: 45.0,
            player_threshold_upper: 60.0,
            map_threshold: 50.0,
            country_threshold: 50.0,
            item_threshold: 50.0,
            method_threshold: 50.0,
            alternate_method_threshold: 70.0,
            ..Self::default()
        }
    }

    /// Builder method to set the graduated player thresholds.
    #[must_use]
    pub fn with_player_thresholds(mut self, lower: f32, upper: f32) -> Self {
        self.player_threshold_lower = lower;
        self.player_threshold_upper = upper;
        self
    }

    /// Builder method to set the map threshold.
    #[must_use]
    pub fn with_map_threshold(mut self, threshold: f32) -> Self {
        self.map_threshold = threshold;
        self
    }

    /// Builder method to set the country threshold.
    #[must_use]
    pub fn with_country_threshold(mut self, threshold: f32) -> Self {
        self.country_threshold = threshold;
        self
    }

    /// Builder method to set the item threshold.
    #[must_use]
    pub fn with_item_threshold(mut self, threshold: f32) -> Self {
        self.item_threshold = threshold;
        self
    }

    /// Builder method to set the command thresholds.
    #[must_use]
    pub fn with_method_thresholds(mut self, primary: f32, alternate: f32) -> Self {
        self.method_threshold = primary;
        self.alternate_method_threshold = alternate;
        self
    }

    /// Builder method to set the input cap.
    #[must_use]
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Builder method to set the rewrite budget.
    #[must_use]
    pub fn with_max_rewrites(mut self, max_rewrites: usize) -> Self {
        self.max_rewrites = max_rewrites;
        self
    }

    /// Threshold a player name of `name_length` characters must reach when
    /// the longest connected name has `max_length` characters.
    ///
    /// Scales linearly from the lower to the upper threshold, so short names
    /// need a lower score than long ones.
    #[must_use]
    pub fn player_threshold(&self, name_length: usize, max_length: usize) -> f32 {
        let ratio = if max_length == 0 {
            1.0
        } else {
            (name_length as f32 / max_length as f32).min(1.0)
        };
        self.player_threshold_lower
            + (self.player_threshold_upper - self.player_threshold_lower) * ratio
    }
}
