//! Live entities: players, maps, and items.

use serde::{Deserialize, Serialize};

/// A player connected to the game server.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Stable unique id (GUID, account id, ...)
    pub uid: String,
    /// Name as the server reports it, clan tag included
    pub name: String,
    /// Name with clan tags and decorations removed
    #[serde(default)]
    pub name_stripped: String,
    /// Latency in milliseconds
    #[serde(default)]
    pub ping: u32,
    /// Round score
    #[serde(default)]
    pub score: i32,
    /// Kills this round
    #[serde(default)]
    pub kills: u32,
    /// Deaths this round
    #[serde(default)]
    pub deaths: u32,
    /// Country name resolved from the player's address
    #[serde(default)]
    pub country_name: String,
    /// ISO country code
    #[serde(default)]
    pub country_code: String,
    /// Names of the items the player currently carries
    #[serde(default)]
    pub inventory: Vec<String>,
}

impl Player {
    /// Creates a player with the given id and name and empty stats.
    #[must_use]
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            uid: uid.into(),
            name_stripped: name.clone(),
            name,
            ping: 0,
            score: 0,
            kills: 0,
            deaths: 0,
            country_name: String::new(),
            country_code: String::new(),
            inventory: Vec::new(),
        }
    }

    /// Sets the stripped name (defaults to the full name).
    #[must_use]
    pub fn with_stripped_name(mut self, stripped: impl Into<String>) -> Self {
        self.name_stripped = stripped.into();
        self
    }

    /// Sets the ping.
    #[must_use]
    pub fn with_ping(mut self, ping: u32) -> Self {
        self.ping = ping;
        self
    }

    /// Sets score, kills, and deaths.
    #[must_use]
    pub fn with_stats(mut self, score: i32, kills: u32, deaths: u32) -> Self {
        self.score = score;
        self.kills = kills;
        self.deaths = deaths;
        self
    }

    /// Sets the country.
    #[must_use]
    pub fn with_country(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
        self.country_name = name.into();
        self.country_code = code.into();
        self
    }

    /// Adds an item to the inventory.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.inventory.push(item.into());
        self
    }

    /// Kill/death ratio. A player with no deaths reports their kill count.
    #[must_use]
    pub fn kdr(&self) -> f64 {
        if self.deaths == 0 {
            f64::from(self.kills)
        } else {
            f64::from(self.kills) / f64::from(self.deaths)
        }
    }

    /// Returns true if the player carries an item with this name.
    #[must_use]
    pub fn carries(&self, item_name: &str) -> bool {
        self.inventory
            .iter()
            .any(|i| i.eq_ignore_ascii_case(item_name))
    }
}

/// A map the server can load.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Map {
    /// Internal map name ("port_valdez")
    pub name: String,
    /// Name shown to players ("Port Valdez")
    #[serde(default)]
    pub friendly_name: String,
    /// Game mode the map runs in
    #[serde(default)]
    pub game_mode: String,
}

impl Map {
    /// Creates a map.
    #[must_use]
    pub fn new(name: impl Into<String>, friendly_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            friendly_name: friendly_name.into(),
            game_mode: String::new(),
        }
    }

    /// Sets the game mode.
    #[must_use]
    pub fn with_game_mode(mut self, mode: impl Into<String>) -> Self {
        self.game_mode = mode.into();
        self
    }

    /// The internal name with separators turned into spaces.
    #[must_use]
    pub fn spoken_name(&self) -> String {
        self.name.replace(['_', '-'], " ")
    }
}

/// An item (weapon, kit, gadget) players can carry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Internal item name
    pub name: String,
    /// Name shown to players
    #[serde(default)]
    pub friendly_name: String,
    /// Category tags ("sniper", "shotgun", "explosive")
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Item {
    /// Creates an item.
    #[must_use]
    pub fn new(name: impl Into<String>, friendly_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            friendly_name: friendly_name.into(),
            tags: Vec::new(),
        }
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}
