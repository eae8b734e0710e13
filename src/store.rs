//! Repository collaborator: where player records go after each committed change.

use crate::models::Player;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Errors that can occur while loading or saving player records.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    Io(std::io::Error),
    /// Records could not be (de)serialized.
    Json(serde_json::Error),
    /// A writer panicked while holding the in-memory store.
    Poisoned,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage io error: {}", e),
            StoreError::Json(e) => write!(f, "storage format error: {}", e),
            StoreError::Poisoned => write!(f, "storage lock poisoned"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

/// Durable home for the full player roster.
pub trait PlayerRepository: Send + Sync {
    fn load(&self) -> Result<Vec<Player>, StoreError>;
    fn save(&self, players: &[Player]) -> Result<(), StoreError>;
}

/// Shared in-memory store. Clones see the same records.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepository {
    players: Arc<Mutex<Vec<Player>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players: Arc::new(Mutex::new(players)),
        }
    }
}

impl PlayerRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Player>, StoreError> {
        self.players
            .lock()
            .map(|g| g.clone())
            .map_err(|_| StoreError::Poisoned)
    }

    fn save(&self, players: &[Player]) -> Result<(), StoreError> {
        let mut g = self.players.lock().map_err(|_| StoreError::Poisoned)?;
        *g = players.to_vec();
        Ok(())
    }
}

/// Roster kept as a pretty-printed JSON array in a single file.
#[derive(Clone, Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PlayerRepository for JsonFileRepository {
    /// A missing file is an empty roster.
    fn load(&self) -> Result<Vec<Player>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, players: &[Player]) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(players)?;
        // Replace via rename; readers never see a partial file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, text)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
