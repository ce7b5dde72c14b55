// Signal producer: publishes per-symbol boundary ladders and directional
// signals, then raises the readiness fence.

use tracing::info;

use crate::config::Settings;
use crate::core::HubBus;
use crate::error::HubResult;
use crate::signals::{format_levels, BoundaryLadder, SignalSource};
use crate::types::ReadinessMarker;

/// One full publish cycle over the tracked symbols. The readiness marker is
/// published last, after every symbol's files are in place, so a reader that
/// observes an advanced marker timestamp may rely on the whole cycle.
pub fn run(
    bus: &HubBus,
    settings: &Settings,
    source: &mut dyn SignalSource,
) -> HubResult<ReadinessMarker> {
    for symbol in &settings.coins {
        bus.dir().ensure_symbol_dir(symbol)?;

        let base = source.base_price(symbol);
        let ladder = BoundaryLadder::around(base);

        bus.publish_text(&bus.dir().low_bounds(symbol), &format_levels(&ladder.low))?;
        bus.publish_text(&bus.dir().high_bounds(symbol), &format_levels(&ladder.high))?;

        let long = source.long_strength(symbol);
        let short = source.short_strength(symbol);
        bus.publish_text(&bus.dir().long_signal(symbol), &format!("{}\n", long))?;
        bus.publish_text(&bus.dir().short_signal(symbol), &format!("{}\n", short))?;

        info!(
            "{}: base {:.2}, long {}, short {}",
            symbol, base, long, short
        );
    }

    bus.dir().ensure_hub_dir()?;
    let marker = ReadinessMarker::for_cycle(&settings.coins);
    bus.publish(&bus.dir().runner_ready(), &marker)?;

    Ok(marker)
}
