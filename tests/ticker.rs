//! Integration tests for the background waiting-time ticker.

use court_rotation::{ticker, writer, MemoryRepository, RosterEntry, Session, WriterTask};
use std::sync::{Arc, RwLock};
use std::time::Duration;

const PERIOD: Duration = Duration::from_secs(60);

fn shared_session(n: u32) -> (Arc<RwLock<Session>>, WriterTask) {
    let (roster_writer, task) = writer::spawn(MemoryRepository::new());
    let mut s = Session::new(1, roster_writer);
    s.ingest_roster(
        (1..=n)
            .map(|i| RosterEntry {
                id: i,
                name: format!("P{i}"),
                ranking: 0,
            })
            .collect(),
    )
    .unwrap();
    (Arc::new(RwLock::new(s)), task)
}

fn waiting_time(session: &RwLock<Session>) -> u32 {
    session.read().unwrap().zones.waiting[0].waiting_time
}

/// Move the paused clock forward and let the ticker run.
async fn advance(by: Duration) {
    tokio::time::advance(by).await;
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn ticks_once_per_period_until_stopped() {
    let (session, _writer) = shared_session(2);
    let t = ticker::spawn(session.clone(), PERIOD);
    for _ in 0..3 {
        advance(PERIOD).await;
    }
    t.stop().await;
    assert_eq!(waiting_time(&session), 3);

    advance(PERIOD * 5).await;
    assert_eq!(waiting_time(&session), 3);
}

#[tokio::test(start_paused = true)]
async fn no_tick_before_first_period() {
    let (session, _writer) = shared_session(1);
    let t = ticker::spawn(session.clone(), PERIOD);
    advance(PERIOD / 2).await;
    t.stop().await;
    assert_eq!(waiting_time(&session), 0);
}
