//! Court rotation: library with models and rotation logic.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;
pub mod ticker;
pub mod writer;

pub use logic::{allocate_all, allocate_one, complete_match, fill_courts, tick, update_ratings};
pub use models::{
    Court, MatchId, MatchRecord, Player, PlayerId, RatingChange, RosterEntry, RotationError,
    Session, Side, Snapshot, Team, Zone, Zones, DEFAULT_RATING, MAX_HISTORY,
};
pub use store::{JsonFileRepository, MemoryRepository, PlayerRepository, StoreError};
pub use writer::{RosterWriter, WriterTask};
