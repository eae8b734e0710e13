//! Integration tests for the player repositories.

use court_rotation::{JsonFileRepository, MemoryRepository, Player, PlayerRepository};

fn sample() -> Vec<Player> {
    let mut a = Player::new(7, "Ann", 2);
    a.rating = 1533;
    a.waiting_time = 4;
    a.games_played = 11;
    a.partners = vec![3, 9, 3];
    vec![a, Player::new(9, "Bob", 5)]
}

fn temp_path(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("court_rotation_{}_{}.json", tag, uuid::Uuid::new_v4()))
}

#[test]
fn json_file_round_trips_every_field() {
    let path = temp_path("roundtrip");
    let repo = JsonFileRepository::new(&path);
    repo.save(&sample()).unwrap();
    assert_eq!(repo.load().unwrap(), sample());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn json_file_uses_persisted_field_names() {
    let path = temp_path("fields");
    let repo = JsonFileRepository::new(&path);
    repo.save(&sample()).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let first = raw[0].as_object().unwrap();
    let mut keys: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec!["gamesPlayed", "id", "name", "partners", "ranking", "rating", "waitingTime"]
    );
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file_loads_empty() {
    let repo = JsonFileRepository::new(temp_path("missing"));
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn memory_clones_share_records() {
    let repo = MemoryRepository::new();
    let handle = repo.clone();
    repo.save(&sample()).unwrap();
    assert_eq!(handle.load().unwrap(), sample());
    assert_eq!(MemoryRepository::with_players(sample()).load().unwrap(), sample());
}
