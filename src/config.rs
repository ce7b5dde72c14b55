// Settings management for the hub processes
//
// The settings document is deliberately forgiving: the tracked symbol list is
// the only field, and any failure to produce one falls back to the fixed
// default set. The fallback is intentional, observable behavior and is always
// logged.

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::types::DEFAULT_COINS;

pub const DEFAULT_SETTINGS_FILE: &str = "gui_settings.json";

#[derive(Debug, Clone)]
pub struct Settings {
    pub coins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            coins: DEFAULT_COINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Load the settings file, falling back to the default symbol list when
    /// the file is absent, unreadable, or malformed.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(settings) => {
                debug!("loaded {} symbols from {}", settings.coins.len(), path.display());
                settings
            }
            Err(reason) => {
                warn!(
                    "{}: {}; using default symbol list {:?}",
                    path.display(),
                    reason,
                    DEFAULT_COINS
                );
                Self::default()
            }
        }
    }

    /// Strict parse of the settings document. Schema: a JSON object with a
    /// `coins` array of symbol strings. Non-string and empty entries are
    /// rejected individually; an empty surviving list counts as malformed.
    fn from_file(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let doc: Value = serde_json::from_str(&content).map_err(|e| e.to_string())?;

        let entries = doc
            .get("coins")
            .ok_or("no coins field")?
            .as_array()
            .ok_or("coins is not an array")?;

        let coins: Vec<String> = entries
            .iter()
            .filter_map(|entry| entry.as_str())
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        if coins.is_empty() {
            return Err("coins list is empty".to_string());
        }

        Ok(Self { coins })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_valid_settings_used_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gui_settings.json");
        fs::write(&path, r#"{"coins": ["DOGE", "ETH"]}"#).unwrap();

        let settings = Settings::load_or_default(&path);
        assert_eq!(settings.coins, vec!["DOGE", "ETH"]);
    }

    #[test]
    fn test_non_string_entries_dropped_individually() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gui_settings.json");
        fs::write(&path, r#"{"coins": ["ETH", 42, "", "XRP"]}"#).unwrap();

        let settings = Settings::load_or_default(&path);
        assert_eq!(settings.coins, vec!["ETH", "XRP"]);
    }

    #[test]
    fn test_absent_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_or_default(dir.path().join("missing.json"));

        assert_eq!(settings.coins, ["BTC", "ETH", "XRP", "BNB", "DOGE"]);
    }
}
