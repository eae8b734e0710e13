//! Data structures for court rotation: players, courts, zones, session state.

mod court;
mod error;
mod player;
mod record;
mod session;
mod zones;

pub use court::{Court, Side, Team};
pub use error::RotationError;
pub use player::{Player, PlayerId, RosterEntry, DEFAULT_RATING};
pub use record::{MatchId, MatchRecord, RatingChange};
pub use session::{Session, Snapshot, MAX_HISTORY};
pub use zones::{Zone, Zones};
