//! Runtime settings, read from the environment with fallbacks.

use std::path::PathBuf;
use std::time::Duration;

pub struct Settings {
    pub host: String,
    pub port: u16,
    pub court_count: usize,
    /// How often every waiting player gains one unit of waiting time.
    pub tick_interval: Duration,
    /// JSON file the roster is persisted to.
    pub data_file: PathBuf,
    /// Required in `X-Admin-Token` for rating overrides when set.
    pub admin_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            court_count: 1,
            tick_interval: Duration::from_secs(60),
            data_file: PathBuf::from("roster.json"),
            admin_token: None,
        }
    }
}

impl Settings {
    /// Override defaults with HOST, PORT, COURT_COUNT, TICK_SECS, DATA_FILE, ADMIN_TOKEN.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but reading from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            court_count: lookup("COURT_COUNT")
                .and_then(|c| c.parse::<usize>().ok())
                .map(|c| c.max(1))
                .unwrap_or(defaults.court_count),
            tick_interval: lookup("TICK_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|&s| s > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.tick_interval),
            data_file: lookup("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            admin_token: lookup("ADMIN_TOKEN").filter(|t| !t.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let s = Settings::from_lookup(lookup(&[]));
        assert_eq!(s.port, 8080);
        assert_eq!(s.court_count, 1);
        assert_eq!(s.tick_interval, Duration::from_secs(60));
        assert!(s.admin_token.is_none());
    }

    #[test]
    fn reads_and_clamps_values() {
        let s = Settings::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("COURT_COUNT", "0"),
            ("TICK_SECS", "5"),
            ("DATA_FILE", "/tmp/club.json"),
            ("ADMIN_TOKEN", "secret"),
        ]));
        assert_eq!(s.port, 9000);
        assert_eq!(s.court_count, 1);
        assert_eq!(s.tick_interval, Duration::from_secs(5));
        assert_eq!(s.data_file, PathBuf::from("/tmp/club.json"));
        assert_eq!(s.admin_token.as_deref(), Some("secret"));
    }

    #[test]
    fn garbage_falls_back() {
        let s = Settings::from_lookup(lookup(&[("PORT", "http"), ("TICK_SECS", "0")]));
        assert_eq!(s.port, 8080);
        assert_eq!(s.tick_interval, Duration::from_secs(60));
    }
}
