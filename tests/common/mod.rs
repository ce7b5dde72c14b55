// Common test utilities and helpers

use powertrader_hub::{HubBus, Settings, SignalSource, StateDir};
use std::fs::{self, Permissions};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a fresh shared state tree rooted in a temp directory
pub fn temp_state() -> (TempDir, HubBus) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let bus = HubBus::new(StateDir::new(dir.path()));
    (dir, bus)
}

/// Settings with an explicit symbol list
pub fn test_settings(coins: &[&str]) -> Settings {
    Settings {
        coins: coins.iter().map(|s| s.to_string()).collect(),
    }
}

/// Deterministic signal source for fixed-decision tests
pub struct FixedSignalSource {
    pub base: f64,
    pub long: u8,
    pub short: u8,
}

impl FixedSignalSource {
    pub fn new(base: f64, long: u8, short: u8) -> Self {
        Self { base, long, short }
    }
}

impl SignalSource for FixedSignalSource {
    fn base_price(&mut self, _symbol: &str) -> f64 {
        self.base
    }

    fn long_strength(&mut self, _symbol: &str) -> u8 {
        self.long
    }

    fn short_strength(&mut self, _symbol: &str) -> u8 {
        self.short
    }
}

/// Write a plausible credential file with the given permission bits
pub fn write_credentials(dir: &Path, mode: u32) -> PathBuf {
    let path = dir.join("rh00d.sct");
    fs::write(
        &path,
        r#"{"api_key": "test-api-key", "private_key": "test-private-key"}"#,
    )
    .expect("Failed to write credential file");
    fs::set_permissions(&path, Permissions::from_mode(mode))
        .expect("Failed to set credential permissions");
    path
}
