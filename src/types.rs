// Shared record types and protocol constants used across the hub processes

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Protocol constants
pub const DEFAULT_COINS: [&str; 5] = ["BTC", "ETH", "XRP", "BNB", "DOGE"];
pub const LADDER_LEVELS: usize = 7;
pub const LONG_SIGNAL_MAX: u8 = 7;
pub const SHORT_SIGNAL_MAX: u8 = 3;
pub const BUY_SIGNAL_THRESHOLD: u8 = 3;
pub const TRADE_QTY: f64 = 0.001;
pub const READY_STAGE: &str = "real_predictions";

/// Current wall-clock time as epoch seconds, the timestamp unit of every
/// published record.
pub fn now_ts() -> i64 {
    Utc::now().timestamp()
}

/// Completion fence published after a full producer cycle. Readers should not
/// trust signal freshness until the marker timestamp has advanced past their
/// last observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessMarker {
    pub timestamp: i64,
    pub ready: bool,
    pub stage: String,
    pub ready_coins: Vec<String>,
    pub total_coins: usize,
}

impl ReadinessMarker {
    pub fn for_cycle(coins: &[String]) -> Self {
        Self {
            timestamp: now_ts(),
            ready: true,
            stage: READY_STAGE.to_string(),
            ready_coins: coins.to_vec(),
            total_coins: coins.len(),
        }
    }
}

/// Aggregate account figures republished by the trader after every cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub total_account_value: f64,
    pub buying_power: f64,
    pub holdings_sell_value: f64,
    pub percent_in_trade: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountStatus {
    pub timestamp: i64,
    pub account: AccountSnapshot,
    /// Always empty in this design: each run is stateless with respect to
    /// prior holdings.
    pub positions: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "buy")]
    Buy,
    #[serde(rename = "sell")]
    Sell,
}

/// One immutable entry of the append-only trade event log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeEvent {
    pub ts: i64,
    pub side: Side,
    pub symbol: String,
    pub qty: f64,
    pub price: f64,
    pub tag: String,
}

/// One point of the append-only account value history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountValuePoint {
    pub ts: i64,
    pub total_account_value: f64,
}

/// Realized P&L record. Always zero in this design; realized profit is not
/// actually tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PnlLedger {
    pub total_realized_profit_usd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingState {
    #[serde(rename = "TRAINING")]
    Training,
    #[serde(rename = "FINISHED")]
    Finished,
}

/// Per-symbol training lifecycle record, overwritten at each transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStatus {
    pub coin: String,
    pub state: TrainingState,
    pub started_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<i64>,
    pub timestamp: i64,
}
