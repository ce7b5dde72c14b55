// Read-only status display: aggregates the shared state tree without ever
// writing to it. Absent or unreadable files are reported, not fatal.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::Settings;
use crate::core::{HubBus, Stamped};
use crate::error::HubResult;
use crate::types::{AccountStatus, PnlLedger, ReadinessMarker, TrainingStatus};

pub fn run(bus: &HubBus, settings: &Settings) -> HubResult<()> {
    info!("PowerTrader AI - Console Hub");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    match read_display::<ReadinessMarker>(bus, &bus.dir().runner_ready()) {
        Some(marker) => {
            info!(
                "runner ready: stage={} coins={}/{} ({}s old)",
                marker.record.stage,
                marker.record.ready_coins.len(),
                marker.record.total_coins,
                marker.age.as_secs()
            );
        }
        None => info!("runner_ready.json: (not present)"),
    }

    match read_display::<AccountStatus>(bus, &bus.dir().trader_status()) {
        Some(status) => {
            info!(
                "account: total {:.2}, buying power {:.2}, holdings {:.2}, {:.2}% deployed ({}s old)",
                status.record.account.total_account_value,
                status.record.account.buying_power,
                status.record.account.holdings_sell_value,
                status.record.account.percent_in_trade,
                status.age.as_secs()
            );
        }
        None => info!("trader_status.json: (not present)"),
    }

    match read_display::<PnlLedger>(bus, &bus.dir().pnl_ledger()) {
        Some(ledger) => info!("realized P&L: {:.2}", ledger.record.total_realized_profit_usd),
        None => info!("pnl_ledger.json: (not present)"),
    }

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for symbol in &settings.coins {
        let long = read_signal_text(bus, &bus.dir().long_signal(symbol));
        let short = read_signal_text(bus, &bus.dir().short_signal(symbol));

        match read_display::<TrainingStatus>(bus, &bus.dir().trainer_status(symbol)) {
            Some(status) => {
                info!(
                    "{}: long={} short={} training={:?}",
                    symbol, long, short, status.record.state
                );
            }
            None => info!("{}: long={} short={}", symbol, long, short),
        }
    }

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    Ok(())
}

/// Read a record for display. A malformed file is reported and shown as
/// absent; a pure reader has nothing to abort.
fn read_display<T: DeserializeOwned>(bus: &HubBus, path: &Path) -> Option<Stamped<T>> {
    match bus.read_latest::<T>(path) {
        Ok(stamped) => stamped,
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

fn read_signal_text(bus: &HubBus, path: &Path) -> String {
    match bus.read_text(path) {
        Ok(Some(text)) => text.trim().to_string(),
        _ => "0".to_string(),
    }
}
