// Decision consumer: turns published signals into trade events and
// republishes aggregated account state.
//
// The credential gate is a hard precondition. Until it passes, this role
// reads no market state and writes nothing.

use rand::{thread_rng, Rng};
use std::path::Path;
use tracing::{debug, info};

use crate::config::Settings;
use crate::core::HubBus;
use crate::credentials::Credentials;
use crate::error::HubResult;
use crate::signals::{parse_first_level, SignalSource};
use crate::types::{
    now_ts, AccountSnapshot, AccountStatus, AccountValuePoint, PnlLedger, ReadinessMarker, Side,
    TradeEvent, BUY_SIGNAL_THRESHOLD, TRADE_QTY,
};

/// What one trader cycle produced, for callers and tests.
#[derive(Debug, Clone)]
pub struct TraderOutcome {
    pub status: AccountStatus,
    pub buys: usize,
}

pub fn run(
    bus: &HubBus,
    settings: &Settings,
    credentials_path: &Path,
    source: &mut dyn SignalSource,
) -> HubResult<TraderOutcome> {
    Credentials::verify_permissions(credentials_path)?;
    let _credentials = Credentials::load(credentials_path)?;

    bus.dir().ensure_hub_dir()?;

    let mut rng = thread_rng();
    let mut holdings_sell_value = 0.0;
    let mut buys = 0;

    for symbol in &settings.coins {
        let price = simulated_price(bus, symbol, source, &mut rng)?;
        let long = read_signal(bus, &bus.dir().long_signal(symbol))?;

        bus.publish_text(&bus.dir().current_price(symbol), &format!("{:.6}\n", price))?;

        if long >= BUY_SIGNAL_THRESHOLD {
            let event = TradeEvent {
                ts: now_ts(),
                side: Side::Buy,
                symbol: format!("{}-USD", symbol),
                qty: TRADE_QTY,
                price,
                tag: "BUY".to_string(),
            };
            bus.append_event(&bus.dir().trade_history(), &event)?;

            holdings_sell_value += price * TRADE_QTY;
            buys += 1;
            info!("{}: BUY {} @ {:.6} (long signal {})", symbol, TRADE_QTY, price, long);
        } else {
            debug!("{}: long signal {} below threshold", symbol, long);
        }
    }

    let buying_power = 1000.0 + rng.gen_range(0..10000) as f64 / 100.0;
    let total_account_value = buying_power + holdings_sell_value;
    let percent_in_trade = if total_account_value > 0.0 {
        holdings_sell_value / total_account_value * 100.0
    } else {
        0.0
    };

    let status = AccountStatus {
        timestamp: now_ts(),
        account: AccountSnapshot {
            total_account_value,
            buying_power,
            holdings_sell_value,
            percent_in_trade,
        },
        positions: Default::default(),
    };

    bus.publish(&bus.dir().trader_status(), &status)?;
    bus.publish(
        &bus.dir().pnl_ledger(),
        &PnlLedger {
            total_realized_profit_usd: 0.0,
        },
    )?;
    bus.append_event(
        &bus.dir().account_value_history(),
        &AccountValuePoint {
            ts: now_ts(),
            total_account_value,
        },
    )?;

    // A prior run may have created the trade log before this binary ever
    // appended; re-tighten it.
    let trade_history = bus.dir().trade_history();
    if trade_history.exists() {
        crate::core::atomic::lock_owner_only(&trade_history)?;
    }

    bus.publish(
        &bus.dir().runner_ready(),
        &ReadinessMarker::for_cycle(&settings.coins),
    )?;

    Ok(TraderOutcome { status, buys })
}

/// Current simulated price: derived from the published low boundary ladder
/// when one exists, otherwise a locally computed synthetic value.
fn simulated_price(
    bus: &HubBus,
    symbol: &str,
    source: &mut dyn SignalSource,
    rng: &mut impl Rng,
) -> HubResult<f64> {
    let first_low = bus
        .read_text(&bus.dir().low_bounds(symbol))?
        .as_deref()
        .and_then(parse_first_level);

    Ok(match first_low {
        Some(level) if level > 0.0 => level * (1.0 + rng.gen_range(0..100) as f64 / 10000.0),
        _ => source.base_price(symbol),
    })
}

/// Published signal strength; an absent or unparsable file reads as zero.
fn read_signal(bus: &HubBus, path: &Path) -> HubResult<u8> {
    Ok(bus
        .read_text(path)?
        .and_then(|s| s.trim().parse::<u8>().ok())
        .unwrap_or(0))
}
