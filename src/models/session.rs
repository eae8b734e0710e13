//! Session: the single owner of roster, zones, court slots and match history.

use crate::models::court::Court;
use crate::models::error::RotationError;
use crate::models::player::{Player, PlayerId, RosterEntry};
use crate::models::record::MatchRecord;
use crate::models::zones::{Zone, Zones};
use crate::writer::RosterWriter;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Finished matches kept in memory; older ones are dropped.
pub const MAX_HISTORY: usize = 200;

/// Read-only view of a session for presentation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub court_count: usize,
    pub courts: Vec<Option<Court>>,
    pub waiting: Vec<Player>,
    pub resting: Vec<Player>,
    pub roster: Vec<Player>,
    /// Most recent failed save, if the last attempt failed.
    pub last_persist_error: Option<String>,
}

/// All mutable rotation state. Callers serialize access (e.g. behind one `RwLock`).
pub struct Session {
    /// Full roster in ingestion order; merged from the zones after every change.
    pub roster: Vec<Player>,
    pub zones: Zones,
    history: VecDeque<MatchRecord>,
    court_count: usize,
    writer: RosterWriter,
}

impl Session {
    /// Empty session with `court_count` court slots (at least 1).
    ///
    /// Every committed change is handed to `writer`; the session never waits on storage.
    pub fn new(court_count: usize, writer: RosterWriter) -> Self {
        let court_count = court_count.max(1);
        Self {
            roster: Vec::new(),
            zones: Zones::with_waiting(Vec::new(), court_count),
            history: VecDeque::new(),
            court_count,
            writer,
        }
    }

    pub fn court_count(&self) -> usize {
        self.court_count
    }

    /// Replace the roster with fresh players and put everyone in Waiting.
    ///
    /// A repeated id is rejected with `DuplicatePlayer` and the session is left as it was.
    pub fn ingest_roster(&mut self, entries: Vec<RosterEntry>) -> Result<(), RotationError> {
        let players: Vec<Player> = entries.into_iter().map(Player::from).collect();
        check_unique(&players)?;
        log::info!("Ingested roster of {} players", players.len());
        self.reset_with(players);
        self.persist();
        Ok(())
    }

    /// Resume from persisted records: ratings, counters and partners kept, everyone in Waiting.
    pub fn restore_roster(&mut self, players: Vec<Player>) -> Result<(), RotationError> {
        check_unique(&players)?;
        log::info!("Restored roster of {} players", players.len());
        self.reset_with(players);
        Ok(())
    }

    fn reset_with(&mut self, players: Vec<Player>) {
        self.zones = Zones::with_waiting(players.clone(), self.court_count);
        self.roster = players;
        self.history.clear();
    }

    /// Set the number of courts used by the next allocation (minimum 1).
    ///
    /// New slots are added right away. Surplus slots are dropped once empty;
    /// a court beyond the count finishes its match but is not refilled.
    pub fn set_court_count(&mut self, n: usize) {
        self.court_count = n.max(1);
        if self.zones.courts.len() < self.court_count {
            self.zones.courts.resize(self.court_count, None);
        }
        self.trim_court_slots();
    }

    /// Drop trailing empty slots past the court count.
    pub fn trim_court_slots(&mut self) {
        while self.zones.courts.len() > self.court_count
            && matches!(self.zones.courts.last(), Some(None))
        {
            self.zones.courts.pop();
        }
    }

    /// Move a player between Waiting and Resting (rest / resume).
    pub fn move_player(&mut self, id: PlayerId, target: Zone) -> Result<(), RotationError> {
        self.zones.move_to(id, target)?;
        log::info!("Player {} moved to {:?}", id, target);
        self.sync_roster();
        self.persist();
        Ok(())
    }

    /// Privileged: set a player's rating directly, wherever the player is. No range check.
    pub fn override_rating(&mut self, id: PlayerId, rating: i32) -> Result<(), RotationError> {
        let in_roster = match self.roster.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.rating = rating;
                true
            }
            None => false,
        };
        let in_zones = match self.zones.find_mut(id) {
            Some(p) => {
                p.rating = rating;
                true
            }
            None => false,
        };
        if !in_roster && !in_zones {
            return Err(RotationError::PlayerNotFound(id));
        }
        log::info!("Rating of player {} overridden to {}", id, rating);
        self.persist();
        Ok(())
    }

    /// Copy current zone records back over the matching roster entries.
    pub fn sync_roster(&mut self) {
        for entry in &mut self.roster {
            if let Some(p) = self.zones.find(entry.id) {
                entry.clone_from(p);
            }
        }
    }

    /// Hand a copy of the roster to the writer. Returns false if the writer is gone.
    pub fn persist(&self) -> bool {
        self.writer.handoff(self.roster.clone())
    }

    /// Finished matches, oldest first (at most `MAX_HISTORY`).
    pub fn history(&self) -> &VecDeque<MatchRecord> {
        &self.history
    }

    pub fn record_match(&mut self, record: MatchRecord) {
        if self.history.len() == MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(record);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            court_count: self.court_count,
            courts: self.zones.courts.clone(),
            waiting: self.zones.waiting.clone(),
            resting: self.zones.resting.clone(),
            roster: self.roster.clone(),
            last_persist_error: self.writer.last_error(),
        }
    }
}

fn check_unique(players: &[Player]) -> Result<(), RotationError> {
    let mut seen = HashSet::new();
    match players.iter().find(|p| !seen.insert(p.id)) {
        Some(p) => Err(RotationError::DuplicatePlayer(p.id)),
        None => Ok(()),
    }
}
