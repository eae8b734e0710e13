//! Player record and the roster entry it is created from.

use serde::{Deserialize, Serialize};

/// Stable numeric identifier for a player (unique within a roster).
pub type PlayerId = u32;

/// Rating every player starts from.
pub const DEFAULT_RATING: i32 = 1500;

/// Identity fields delivered by roster ingestion.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub name: String,
    pub ranking: i32,
}

/// A player in the session. Field names match the persisted record layout.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// External seed ranking; informational only.
    pub ranking: i32,
    pub rating: i32,
    /// Ticks spent in Waiting since the player last entered it.
    pub waiting_time: u32,
    pub games_played: u32,
    /// Everyone this player has been teamed with, in order, repeats included.
    pub partners: Vec<PlayerId>,
}

impl Player {
    /// Create a player with the default rating and zeroed counters.
    pub fn new(id: PlayerId, name: impl Into<String>, ranking: i32) -> Self {
        Self {
            id,
            name: name.into(),
            ranking,
            rating: DEFAULT_RATING,
            waiting_time: 0,
            games_played: 0,
            partners: Vec::new(),
        }
    }

    /// Same as `new` but with a chosen rating (handy for seeding and tests).
    pub fn with_rating(id: PlayerId, name: impl Into<String>, rating: i32) -> Self {
        Self {
            rating,
            ..Self::new(id, name, 0)
        }
    }

    /// Record one finished game.
    pub fn record_game(&mut self) {
        self.games_played += 1;
    }

    /// Remember that this player was teamed with `partner`.
    pub fn record_partner(&mut self, partner: PlayerId) {
        self.partners.push(partner);
    }
}

impl From<RosterEntry> for Player {
    fn from(entry: RosterEntry) -> Self {
        Self::new(entry.id, entry.name, entry.ranking)
    }
}
