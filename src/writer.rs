//! Background roster writer: the session hands off copies, this task saves them.

use crate::models::Player;
use crate::store::PlayerRepository;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Sending side, owned by the session. Cheap to clone.
#[derive(Clone)]
pub struct RosterWriter {
    tx: mpsc::UnboundedSender<Vec<Player>>,
    last_error: Arc<Mutex<Option<String>>>,
}

impl RosterWriter {
    /// Queue a roster for saving. Returns false once the writer has shut down.
    pub fn handoff(&self, roster: Vec<Player>) -> bool {
        match self.tx.send(roster) {
            Ok(()) => true,
            Err(_) => {
                log::warn!("Roster writer is stopped; change not queued for saving");
                false
            }
        }
    }

    /// Message of the most recent failed save, cleared by the next successful one.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().ok().and_then(|g| g.clone())
    }
}

/// Handle to the running writer task.
pub struct WriterTask {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl WriterTask {
    /// Save whatever is still queued, then exit. No save runs after this returns.
    pub async fn stop(self) {
        let _ = self.stop.send(());
        if let Err(e) = self.handle.await {
            log::warn!("Roster writer ended abnormally: {}", e);
        }
    }
}

/// Start the writer task owning `repository`.
///
/// Saves run one at a time on the blocking pool. When several rosters are queued
/// only the newest is written.
pub fn spawn(repository: impl PlayerRepository + 'static) -> (RosterWriter, WriterTask) {
    let repository: Arc<dyn PlayerRepository> = Arc::new(repository);
    let (tx, mut rx) = mpsc::unbounded_channel::<Vec<Player>>();
    let (stop, mut stopped) = oneshot::channel::<()>();
    let last_error = Arc::new(Mutex::new(None));
    let status = last_error.clone();

    let handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                biased;
                received = rx.recv() => match received {
                    Some(roster) => {
                        let latest = newest(&mut rx, roster);
                        save(&repository, latest, &status).await;
                    }
                    None => break,
                },
                _ = &mut stopped => {
                    if let Ok(roster) = rx.try_recv() {
                        let latest = newest(&mut rx, roster);
                        save(&repository, latest, &status).await;
                    }
                    break;
                }
            }
        }
        log::info!("Roster writer stopped");
    });

    (RosterWriter { tx, last_error }, WriterTask { stop, handle })
}

fn newest(rx: &mut mpsc::UnboundedReceiver<Vec<Player>>, mut roster: Vec<Player>) -> Vec<Player> {
    while let Ok(next) = rx.try_recv() {
        roster = next;
    }
    roster
}

async fn save(
    repository: &Arc<dyn PlayerRepository>,
    roster: Vec<Player>,
    status: &Mutex<Option<String>>,
) {
    let count = roster.len();
    let repo = repository.clone();
    let outcome = match tokio::task::spawn_blocking(move || repo.save(&roster)).await {
        Ok(Ok(())) => None,
        Ok(Err(e)) => Some(e.to_string()),
        Err(e) => Some(format!("save task failed: {}", e)),
    };
    match &outcome {
        Some(message) => log::error!("Failed to persist roster of {} players: {}", count, message),
        None => log::debug!("Persisted roster of {} players", count),
    }
    if let Ok(mut g) = status.lock() {
        *g = outcome;
    }
}
