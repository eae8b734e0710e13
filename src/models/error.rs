//! Errors returned by session operations.

use crate::models::player::PlayerId;
use crate::models::zones::Zone;

/// Contract violations and lookup failures. State is left untouched whenever one is returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RotationError {
    /// Court index past the end of the court slot list.
    CourtOutOfRange { index: usize, slots: usize },
    /// Court slot exists but has no match in progress.
    CourtEmpty(usize),
    /// Winning team number other than 1 or 2.
    InvalidTeam(u8),
    /// Same player id given twice in one roster.
    DuplicatePlayer(PlayerId),
    /// Player id not present in any zone.
    PlayerNotFound(PlayerId),
    /// Player is seated on a court and cannot be moved until the match ends.
    PlayerOnCourt(PlayerId),
    /// Transition that only the allocator may perform (entering Active).
    InvalidTransition { player: PlayerId, target: Zone },
}

impl std::fmt::Display for RotationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RotationError::CourtOutOfRange { index, slots } => {
                write!(f, "Court {} does not exist ({} court slots)", index, slots)
            }
            RotationError::CourtEmpty(index) => write!(f, "Court {} has no match in progress", index),
            RotationError::InvalidTeam(n) => write!(f, "Winning team must be 1 or 2 (got {})", n),
            RotationError::DuplicatePlayer(id) => write!(f, "Player id {} appears more than once", id),
            RotationError::PlayerNotFound(id) => write!(f, "Player {} not found", id),
            RotationError::PlayerOnCourt(id) => {
                write!(f, "Player {} is on a court; finish the match first", id)
            }
            RotationError::InvalidTransition { player, target } => {
                write!(f, "Player {} cannot be moved to {:?} directly", player, target)
            }
        }
    }
}

impl std::error::Error for RotationError {}
