//! Rotation: finish matches, feed players back into Waiting, refill courts, accrue waiting time.

use crate::logic::allocation::{allocate_all, allocate_one};
use crate::logic::rating::update_ratings;
use crate::models::{MatchRecord, PlayerId, RatingChange, RotationError, Session, Side};
use chrono::Utc;
use uuid::Uuid;

/// Fill every empty court slot (up to the court count) from Waiting.
///
/// Returns the number of courts formed. Stops at the first slot that cannot be filled.
pub fn fill_courts(session: &mut Session) -> usize {
    let count = session.court_count();
    if session.zones.courts.len() < count {
        session.zones.courts.resize(count, None);
    }
    let empty: Vec<usize> = (0..count)
        .filter(|&i| session.zones.courts[i].is_none())
        .collect();
    if empty.is_empty() {
        return 0;
    }

    let waiting = std::mem::take(&mut session.zones.waiting);
    let (courts, rest) = allocate_all(waiting, empty.len());
    session.zones.waiting = rest;
    let formed = courts.len();
    for (slot, court) in empty.into_iter().zip(courts) {
        log::info!("Court {} started: {:?} vs {:?}", slot, court.team_1.ids(), court.team_2.ids());
        session.zones.courts[slot] = Some(court);
    }

    if formed > 0 {
        session.sync_roster();
        session.persist();
    }
    formed
}

/// Record the result on court `court_index` and rotate its players.
///
/// 1. Validate the court has a match and `winning_team` is 1 or 2 (state untouched otherwise).
/// 2. Update ratings of all four players.
/// 3. Count the game, reset waiting time, and append all four to Waiting.
/// 4. Try to start a new match on the same court from the whole Waiting pool; the slot
///    is left empty when fewer than four are available.
/// 5. Merge into the roster and persist.
pub fn complete_match(
    session: &mut Session,
    court_index: usize,
    winning_team: u8,
) -> Result<MatchRecord, RotationError> {
    let slots = session.zones.courts.len();
    match session.zones.courts.get(court_index) {
        None => {
            return Err(RotationError::CourtOutOfRange {
                index: court_index,
                slots,
            })
        }
        Some(None) => return Err(RotationError::CourtEmpty(court_index)),
        Some(Some(_)) => {}
    }
    let winner = Side::from_number(winning_team)?;
    let court = session.zones.courts[court_index]
        .take()
        .ok_or(RotationError::CourtEmpty(court_index))?;

    let (mut winners, mut losers) = court.into_result(winner);
    let before: Vec<(PlayerId, i32)> = winners
        .iter()
        .chain(losers.iter())
        .map(|p| (p.id, p.rating))
        .collect();
    update_ratings(&mut winners, &mut losers);
    let changes: Vec<RatingChange> = winners
        .iter()
        .chain(losers.iter())
        .zip(before)
        .map(|(p, (player, before))| RatingChange {
            player,
            before,
            after: p.rating,
        })
        .collect();
    let winner_ids = [winners[0].id, winners[1].id];
    let loser_ids = [losers[0].id, losers[1].id];

    for mut p in winners.into_iter().chain(losers) {
        p.record_game();
        session.zones.release(p);
    }

    let refilled = if court_index < session.court_count() {
        let waiting = std::mem::take(&mut session.zones.waiting);
        let (court, rest) = allocate_one(waiting);
        session.zones.waiting = rest;
        match court {
            Some(c) => {
                log::info!("Court {} restarted: {:?} vs {:?}", court_index, c.team_1.ids(), c.team_2.ids());
                session.zones.courts[court_index] = Some(c);
                true
            }
            None => false,
        }
    } else {
        false
    };
    session.trim_court_slots();

    session.sync_roster();
    let persisted = session.persist();

    let record = MatchRecord {
        id: Uuid::new_v4(),
        court_index,
        winner,
        winners: winner_ids,
        losers: loser_ids,
        changes,
        refilled,
        persisted,
        finished_at: Utc::now(),
    };
    log::info!(
        "Court {} finished: team {} won ({:?} beat {:?}), refilled: {}",
        court_index,
        winner.number(),
        winner_ids,
        loser_ids,
        refilled
    );
    session.record_match(record.clone());
    Ok(record)
}

/// Add one unit of waiting time to every player in Waiting. Returns how many were ticked.
pub fn tick(session: &mut Session) -> usize {
    let waiting = &mut session.zones.waiting;
    if waiting.is_empty() {
        return 0;
    }
    for p in waiting.iter_mut() {
        p.waiting_time = p.waiting_time.saturating_add(1);
    }
    let ticked = waiting.len();
    session.sync_roster();
    log::debug!("Waiting time advanced for {} players", ticked);
    ticked
}
