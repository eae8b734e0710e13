//! Integration tests for zone transitions.

use court_rotation::{allocate_one, Player, RotationError, Zone, Zones};

fn zones_with(n: u32) -> Zones {
    let players = (1..=n).map(|i| Player::new(i, format!("P{i}"), i as i32)).collect();
    Zones::with_waiting(players, 1)
}

#[test]
fn move_to_resting_and_back_resets_waiting_time() {
    let mut z = zones_with(3);
    z.waiting[1].waiting_time = 7;
    z.move_to(2, Zone::Resting).unwrap();
    assert_eq!(z.locate(2), Some(Zone::Resting));
    assert_eq!(z.resting[0].waiting_time, 0);
    assert_eq!(z.waiting.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);

    z.resting[0].waiting_time = 4;
    z.move_to(2, Zone::Waiting).unwrap();
    assert!(z.resting.is_empty());
    assert_eq!(z.waiting.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3, 2]);
    assert_eq!(z.waiting[2].waiting_time, 0);
}

#[test]
fn move_within_same_zone_appends() {
    let mut z = zones_with(3);
    z.move_to(1, Zone::Waiting).unwrap();
    assert_eq!(z.waiting.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3, 1]);
    assert_eq!(z.player_count(), 3);
}

#[test]
fn unknown_player_is_reported() {
    let mut z = zones_with(2);
    let before = z.clone();
    assert_eq!(z.move_to(99, Zone::Resting), Err(RotationError::PlayerNotFound(99)));
    assert_eq!(z, before);
}

#[test]
fn seated_player_cannot_be_moved() {
    let mut z = zones_with(4);
    let (court, rest) = allocate_one(std::mem::take(&mut z.waiting));
    z.waiting = rest;
    z.courts[0] = court;
    let before = z.clone();
    assert_eq!(z.locate(1), Some(Zone::Active));
    assert_eq!(z.move_to(1, Zone::Resting), Err(RotationError::PlayerOnCourt(1)));
    assert_eq!(z, before);
}

#[test]
fn active_is_entered_only_by_allocation() {
    let mut z = zones_with(2);
    assert_eq!(
        z.move_to(1, Zone::Active),
        Err(RotationError::InvalidTransition {
            player: 1,
            target: Zone::Active
        })
    );
    assert_eq!(z.locate(1), Some(Zone::Waiting));
}

#[test]
fn every_player_in_exactly_one_zone() {
    let mut z = zones_with(6);
    z.move_to(6, Zone::Resting).unwrap();
    let (court, rest) = allocate_one(std::mem::take(&mut z.waiting));
    z.waiting = rest;
    z.courts[0] = court;

    let mut all: Vec<u32> = z.players().map(|p| p.id).collect();
    all.sort();
    assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(z.active().count(), 4);
    assert_eq!(z.waiting.len(), 1);
    assert_eq!(z.resting.len(), 1);
}
