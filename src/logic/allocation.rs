//! Court allocation: choose four players by priority, then balance the teams.

use crate::models::{Court, Player};
use std::cmp::Reverse;

/// Players needed to fill one court.
pub const PLAYERS_PER_COURT: usize = 4;

/// Fill one court from `available`.
///
/// 1. Stable-sort by games played (ascending), then waiting time (descending).
/// 2. Take the first four; everyone else is returned in their original order.
/// 3. Order the four by rating (descending) and pair 1st with 4th (team 1), 2nd with 3rd (team 2).
/// 4. Record each pairing in both partners' history.
///
/// With fewer than four players the pool comes back unchanged and no court is formed.
pub fn allocate_one(available: Vec<Player>) -> (Option<Court>, Vec<Player>) {
    if available.len() < PLAYERS_PER_COURT {
        return (None, available);
    }

    let mut order: Vec<usize> = (0..available.len()).collect();
    order.sort_by_key(|&i| {
        let p = &available[i];
        (p.games_played, Reverse(p.waiting_time))
    });
    let picked = &order[..PLAYERS_PER_COURT];

    let mut slots: Vec<Option<Player>> = available.into_iter().map(Some).collect();
    let mut candidates: [Player; 4] = std::array::from_fn(|k| {
        slots[picked[k]]
            .take()
            .expect("priority order holds distinct indices into the pool")
    });
    let remaining: Vec<Player> = slots.into_iter().flatten().collect();

    candidates.sort_by_key(|p| Reverse(p.rating));
    let [mut strongest, mut second, mut third, mut weakest] = candidates;

    strongest.record_partner(weakest.id);
    weakest.record_partner(strongest.id);
    second.record_partner(third.id);
    third.record_partner(second.id);

    let court = Court::new([strongest, weakest], [second, third]);
    (Some(court), remaining)
}

/// Fill up to `court_count` courts (at least 1) from the waiting pool.
///
/// Stops at the first court that cannot be filled.
pub fn allocate_all(waiting: Vec<Player>, court_count: usize) -> (Vec<Court>, Vec<Player>) {
    let court_count = court_count.max(1);
    let mut courts = Vec::new();
    let mut pool = waiting;
    while courts.len() < court_count {
        let (court, rest) = allocate_one(pool);
        pool = rest;
        match court {
            Some(c) => courts.push(c),
            None => break,
        }
    }
    (courts, pool)
}
