//! The three disjoint player pools and transitions between them.

use crate::models::court::Court;
use crate::models::error::RotationError;
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Which pool a player is in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// Seated on a court.
    Active,
    /// Eligible for the next allocation.
    Waiting,
    /// Opted out.
    Resting,
}

/// Active, Waiting and Resting pools. Active is the set of players seated on `courts`.
///
/// A player id appears in at most one place across all three; insertion order
/// of `waiting` and `resting` is preserved.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Zones {
    /// Court slots; `None` is an empty court.
    pub courts: Vec<Option<Court>>,
    pub waiting: Vec<Player>,
    pub resting: Vec<Player>,
}

impl Zones {
    /// Everyone waiting, no courts in use, `slots` empty court slots.
    pub fn with_waiting(waiting: Vec<Player>, slots: usize) -> Self {
        Self {
            courts: vec![None; slots],
            waiting,
            resting: Vec::new(),
        }
    }

    /// Players currently seated on a court, in court order.
    pub fn active(&self) -> impl Iterator<Item = &Player> {
        self.courts.iter().flatten().flat_map(|c| c.players())
    }

    /// Every player in every zone.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.active()
            .chain(self.waiting.iter())
            .chain(self.resting.iter())
    }

    pub fn player_count(&self) -> usize {
        self.players().count()
    }

    /// Zone currently holding `id`, if any.
    pub fn locate(&self, id: PlayerId) -> Option<Zone> {
        if self.active().any(|p| p.id == id) {
            Some(Zone::Active)
        } else if self.waiting.iter().any(|p| p.id == id) {
            Some(Zone::Waiting)
        } else if self.resting.iter().any(|p| p.id == id) {
            Some(Zone::Resting)
        } else {
            None
        }
    }

    pub fn find(&self, id: PlayerId) -> Option<&Player> {
        self.players().find(|p| p.id == id)
    }

    /// Mutable lookup across courts, Waiting and Resting.
    pub fn find_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        let Zones {
            courts,
            waiting,
            resting,
        } = self;
        courts
            .iter_mut()
            .flatten()
            .flat_map(|c| c.players_mut())
            .chain(waiting.iter_mut())
            .chain(resting.iter_mut())
            .find(|p| p.id == id)
    }

    /// Move a player between Waiting and Resting, appending to the target and resetting waiting time.
    ///
    /// Unknown ids are reported as `PlayerNotFound`. Seated players cannot be moved
    /// (a court is never left partially filled), and Active can only be entered
    /// through allocation.
    pub fn move_to(&mut self, id: PlayerId, target: Zone) -> Result<(), RotationError> {
        if target == Zone::Active {
            return Err(RotationError::InvalidTransition { player: id, target });
        }
        let source = match self.locate(id) {
            None => return Err(RotationError::PlayerNotFound(id)),
            Some(Zone::Active) => return Err(RotationError::PlayerOnCourt(id)),
            Some(zone) => zone,
        };
        let pool = if source == Zone::Waiting {
            &mut self.waiting
        } else {
            &mut self.resting
        };
        let idx = pool
            .iter()
            .position(|p| p.id == id)
            .ok_or(RotationError::PlayerNotFound(id))?;
        let mut player = pool.remove(idx);
        player.waiting_time = 0;
        if target == Zone::Waiting {
            self.waiting.push(player);
        } else {
            self.resting.push(player);
        }
        Ok(())
    }

    /// Put a player who just left a court back at the end of Waiting.
    pub fn release(&mut self, mut player: Player) {
        player.waiting_time = 0;
        self.waiting.push(player);
    }
}
