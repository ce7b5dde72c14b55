// Canonical layout of the shared state directory
//
// All path construction goes through StateDir so the one reserved-name
// asymmetry lives in a single place: the symbol `BTC` maps to the base
// directory itself rather than a subfolder, and every caller must preserve
// that.

use std::path::{Path, PathBuf};

use crate::core::atomic;
use crate::error::HubResult;

const HUB_DIR: &str = "hub_data";
const LOW_BOUNDS_FILE: &str = "low_bound_prices.html";
const HIGH_BOUNDS_FILE: &str = "high_bound_prices.html";
const LONG_SIGNAL_FILE: &str = "long_dca_signal.txt";
const SHORT_SIGNAL_FILE: &str = "short_dca_signal.txt";
const TRAINER_STATUS_FILE: &str = "trainer_status.json";
const TRAINER_LAST_TIME_FILE: &str = "trainer_last_training_time.txt";
const RUNNER_READY_FILE: &str = "runner_ready.json";
const TRADER_STATUS_FILE: &str = "trader_status.json";
const PNL_LEDGER_FILE: &str = "pnl_ledger.json";
const TRADE_HISTORY_FILE: &str = "trade_history.jsonl";
const ACCOUNT_VALUE_HISTORY_FILE: &str = "account_value_history.jsonl";

/// The reserved symbol that shares the base directory.
pub const BASE_SYMBOL: &str = "BTC";

#[derive(Debug, Clone)]
pub struct StateDir {
    base: PathBuf,
}

impl StateDir {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Namespace folder for a symbol. `BTC` resolves to the base directory.
    pub fn symbol_dir(&self, symbol: &str) -> PathBuf {
        if symbol == BASE_SYMBOL {
            self.base.clone()
        } else {
            self.base.join(symbol)
        }
    }

    /// Create the symbol namespace if absent and tighten its permissions.
    pub fn ensure_symbol_dir(&self, symbol: &str) -> HubResult<PathBuf> {
        let dir = self.symbol_dir(symbol);
        atomic::ensure_private_dir(&dir)?;
        Ok(dir)
    }

    pub fn hub_dir(&self) -> PathBuf {
        self.base.join(HUB_DIR)
    }

    /// Create `hub_data/` if absent and tighten its permissions. Callers
    /// treat failure as fatal: there is no safe fallback for the hub
    /// namespace.
    pub fn ensure_hub_dir(&self) -> HubResult<PathBuf> {
        let dir = self.hub_dir();
        atomic::ensure_private_dir(&dir)?;
        Ok(dir)
    }

    pub fn low_bounds(&self, symbol: &str) -> PathBuf {
        self.symbol_dir(symbol).join(LOW_BOUNDS_FILE)
    }

    pub fn high_bounds(&self, symbol: &str) -> PathBuf {
        self.symbol_dir(symbol).join(HIGH_BOUNDS_FILE)
    }

    pub fn long_signal(&self, symbol: &str) -> PathBuf {
        self.symbol_dir(symbol).join(LONG_SIGNAL_FILE)
    }

    pub fn short_signal(&self, symbol: &str) -> PathBuf {
        self.symbol_dir(symbol).join(SHORT_SIGNAL_FILE)
    }

    pub fn trainer_status(&self, symbol: &str) -> PathBuf {
        self.symbol_dir(symbol).join(TRAINER_STATUS_FILE)
    }

    pub fn trainer_last_time(&self, symbol: &str) -> PathBuf {
        self.symbol_dir(symbol).join(TRAINER_LAST_TIME_FILE)
    }

    /// Last simulated price per symbol, written next to the base directory
    /// regardless of the symbol's namespace folder.
    pub fn current_price(&self, symbol: &str) -> PathBuf {
        self.base.join(format!("{}_current_price.txt", symbol))
    }

    pub fn runner_ready(&self) -> PathBuf {
        self.hub_dir().join(RUNNER_READY_FILE)
    }

    pub fn trader_status(&self) -> PathBuf {
        self.hub_dir().join(TRADER_STATUS_FILE)
    }

    pub fn pnl_ledger(&self) -> PathBuf {
        self.hub_dir().join(PNL_LEDGER_FILE)
    }

    pub fn trade_history(&self) -> PathBuf {
        self.hub_dir().join(TRADE_HISTORY_FILE)
    }

    pub fn account_value_history(&self) -> PathBuf {
        self.hub_dir().join(ACCOUNT_VALUE_HISTORY_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_symbol_maps_to_base_dir() {
        let dir = StateDir::new("/tmp/hub");

        assert_eq!(dir.symbol_dir("BTC"), PathBuf::from("/tmp/hub"));
        assert_eq!(dir.symbol_dir("ETH"), PathBuf::from("/tmp/hub/ETH"));
    }

    #[test]
    fn test_symbol_file_paths() {
        let dir = StateDir::new("/tmp/hub");

        assert_eq!(
            dir.low_bounds("ETH"),
            PathBuf::from("/tmp/hub/ETH/low_bound_prices.html")
        );
        assert_eq!(
            dir.low_bounds("BTC"),
            PathBuf::from("/tmp/hub/low_bound_prices.html")
        );
        assert_eq!(
            dir.current_price("ETH"),
            PathBuf::from("/tmp/hub/ETH_current_price.txt")
        );
    }

    #[test]
    fn test_hub_file_paths() {
        let dir = StateDir::new("/tmp/hub");

        assert_eq!(
            dir.runner_ready(),
            PathBuf::from("/tmp/hub/hub_data/runner_ready.json")
        );
        assert_eq!(
            dir.trade_history(),
            PathBuf::from("/tmp/hub/hub_data/trade_history.jsonl")
        );
    }
}
