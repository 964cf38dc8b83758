//! The result of a successful parse.

use chrono::{DateTime, TimeDelta, Utc};
use parley_foundation::{IntervalSpec, TimeModifier};
use parley_grammar::{
    ObjectKind, PrimitiveKind, Sentence, TemporalKind, ThingKind, Token, TokenVariant, Value,
};
use parley_state::{FuzzyState, Item, Map, Player, TextCommand};

/// A command recognized in free text, with everything it was said about.
///
/// The caller decides whether the speaker may run the command and what to do
/// with the arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct TextCommandMatch {
    /// Prefix the input arrived with ("!", "@", "/")
    pub prefix: String,
    /// The primary command followed by its alternates
    pub commands: Vec<TextCommand>,
    /// Who typed the input
    pub speaker: Option<Player>,
    /// Players named, with "me" resolved to the speaker
    pub players: Vec<Player>,
    /// Maps named
    pub maps: Vec<Map>,
    /// Items named
    pub items: Vec<Item>,
    /// Numbers, in input order
    pub numeric: Vec<f64>,
    /// Quoted text, quotes removed
    pub quotes: Vec<String>,
    /// When to run the command ("in 5 minutes")
    pub delay: Option<DateTime<Utc>>,
    /// How long the command lasts ("for 2 hours")
    pub period: Option<TimeDelta>,
    /// How often to repeat the command ("every day at 5pm")
    pub interval: Option<IntervalSpec>,
}

impl TextCommandMatch {
    /// Assembles a match from a reduced sentence.
    ///
    /// Only the best token of each phrase is read. Players, maps, and items
    /// keep their first mention and drop repeats. The first temporal token of
    /// each kind wins.
    #[must_use]
    pub fn assemble(
        prefix: impl Into<String>,
        commands: Vec<TextCommand>,
        sentence: &Sentence,
        state: &FuzzyState,
    ) -> Self {
        let mut result = Self {
            prefix: prefix.into(),
            commands,
            speaker: state.speaker.clone(),
            players: Vec::new(),
            maps: Vec::new(),
            items: Vec::new(),
            numeric: Vec::new(),
            quotes: Vec::new(),
            delay: None,
            period: None,
            interval: None,
        };
        for token in sentence.phrases().filter_map(|p| p.best()) {
            result.absorb(token, state);
        }
        result
    }

    /// The primary command.
    #[must_use]
    pub fn command(&self) -> Option<&TextCommand> {
        self.commands.first()
    }

    /// Commands that may have been meant instead of the primary.
    #[must_use]
    pub fn alternates(&self) -> &[TextCommand] {
        self.commands.get(1..).unwrap_or_default()
    }

    fn absorb(&mut self, token: &Token, state: &FuzzyState) {
        match (token.variant, &token.value) {
            (TokenVariant::Object(ObjectKind::Thing(ThingKind::Player)), Some(Value::Players(p))) => {
                self.add_players(p);
            }
            (TokenVariant::Object(ObjectKind::SelfReflection), _) => {
                if let Some(speaker) = &state.speaker {
                    self.add_players(std::slice::from_ref(speaker));
                }
            }
            (
                TokenVariant::Object(ObjectKind::Thing(ThingKind::Location)),
                Some(Value::Locations(countries)),
            ) => {
                let from: Vec<Player> = state
                    .players
                    .iter()
                    .filter(|p| countries.iter().any(|c| c.eq_ignore_ascii_case(&p.country_name)))
                    .cloned()
                    .collect();
                self.add_players(&from);
            }
            (TokenVariant::Object(ObjectKind::Thing(ThingKind::Map)), Some(Value::Maps(maps))) => {
                for map in maps {
                    if !self.maps.iter().any(|m| m.name == map.name) {
                        self.maps.push(map.clone());
                    }
                }
            }
            (TokenVariant::Object(ObjectKind::Thing(ThingKind::Item)), Some(Value::Items(items))) => {
                for item in items {
                    if !self.items.iter().any(|i| i.name == item.name) {
                        self.items.push(item.clone());
                    }
                }
            }
            (TokenVariant::Primitive(PrimitiveKind::Numeric), Some(Value::Number(n))) => {
                self.numeric.push(*n);
            }
            (TokenVariant::Primitive(PrimitiveKind::String), Some(Value::Text(text))) => {
                self.quotes.push(text.clone());
            }
            (
                TokenVariant::Primitive(PrimitiveKind::Temporal(TemporalKind::DateTime)),
                Some(Value::Temporal(pattern)),
            ) => match pattern.modifier {
                TimeModifier::Delay if self.delay.is_none() => {
                    self.delay = pattern.resolve(state.now);
                }
                TimeModifier::Period | TimeModifier::None if self.period.is_none() => {
                    self.period = pattern.duration(state.now);
                }
                TimeModifier::Interval if self.interval.is_none() => {
                    self.interval = Some(pattern.interval());
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn add_players(&mut self, players: &[Player]) {
        for player in players {
            if !self.players.iter().any(|p| p.uid == player.uid) {
                self.players.push(player.clone());
            }
        }
    }
}
