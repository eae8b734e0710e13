//! Elo-style team rating update.
//!
//! Each team is rated by the mean of its two players. The full K-factor change
//! is applied to every player on the team (it is not split between teammates),
//! rounded half away from zero per player.

use crate::models::Player;

/// Maximum rating change per player per match.
pub const K_FACTOR: f64 = 32.0;

/// Mean rating of a two-player team.
pub fn team_average(team: &[Player; 2]) -> f64 {
    (f64::from(team[0].rating) + f64::from(team[1].rating)) / 2.0
}

/// Expected score of a team rated `rating` against one rated `opponent`.
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10_f64.powf((opponent - rating) / 400.0))
}

/// Rounded change for an actual score (1 win, 0 loss) given the expected score.
pub fn adjustment(actual: f64, expected: f64) -> i32 {
    (K_FACTOR * (actual - expected)).round() as i32
}

/// Update both teams' ratings in place after `winners` beat `losers`.
///
/// Touches only `rating`; games played, waiting time and partners are the caller's business.
/// Ratings have no floor and may go negative.
pub fn update_ratings(winners: &mut [Player; 2], losers: &mut [Player; 2]) {
    let avg_win = team_average(winners);
    let avg_lose = team_average(losers);
    let e_win = expected_score(avg_win, avg_lose);
    let e_lose = 1.0 - e_win;

    let gain = adjustment(1.0, e_win);
    let loss = adjustment(0.0, e_lose);
    for p in winners.iter_mut() {
        p.rating += gain;
    }
    for p in losers.iter_mut() {
        p.rating += loss;
    }
}
