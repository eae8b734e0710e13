//! History of finished matches.

use crate::models::court::Side;
use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a finished match.
pub type MatchId = Uuid;

/// Rating of one player before and after a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player: PlayerId,
    pub before: i32,
    pub after: i32,
}

impl RatingChange {
    pub fn delta(&self) -> i32 {
        self.after - self.before
    }
}

/// Outcome of `complete_match`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub court_index: usize,
    pub winner: Side,
    pub winners: [PlayerId; 2],
    pub losers: [PlayerId; 2],
    /// Winners first, then losers.
    pub changes: Vec<RatingChange>,
    /// A new match started on the same court straight away.
    pub refilled: bool,
    /// The updated roster was handed to the writer (saving itself happens later).
    pub persisted: bool,
    pub finished_at: DateTime<Utc>,
}
