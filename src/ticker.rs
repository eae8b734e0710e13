//! Periodic waiting-time accrual bound to the session's lifetime.

use crate::logic::tick;
use crate::models::Session;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to the running tick task. Dropping it also ends the task, without waiting for it.
pub struct Ticker {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Signal the task and wait for it to exit. No tick runs after this returns.
    pub async fn stop(self) {
        let _ = self.stop.send(());
        if let Err(e) = self.handle.await {
            log::warn!("Waiting-time ticker ended abnormally: {}", e);
        }
    }
}

/// Start ticking `session` every `period`. The first tick fires one period from now.
///
/// Ticks run one at a time inside a single task; a tick that falls behind is skipped, not queued.
pub fn spawn(session: Arc<RwLock<Session>>, period: Duration) -> Ticker {
    let (stop, mut stopped) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        let start = tokio::time::Instant::now() + period;
        let mut interval = tokio::time::interval_at(start, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = &mut stopped => break,
                _ = interval.tick() => apply_tick(&session),
            }
        }
        log::info!("Waiting-time ticker stopped");
    });
    Ticker { stop, handle }
}

fn apply_tick(session: &RwLock<Session>) {
    match session.write() {
        Ok(mut g) => {
            tick(&mut g);
        }
        Err(_) => log::error!("Session lock poisoned; skipping tick"),
    }
}
