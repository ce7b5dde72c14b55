// Training state machine: TRAINING -> FINISHED, exactly two status writes
// per invocation.
//
// There is no PAUSED, FAILED, or CANCELLED state, and a TRAINING record left
// behind by a crash is not resumed. The simulated work is not cancellable
// once started.

use std::thread;
use std::time::Duration;

use tracing::info;

use crate::core::HubBus;
use crate::error::HubResult;
use crate::progress::TrainingProgress;
use crate::types::{now_ts, TrainingState, TrainingStatus};

const WORK_TICKS: u32 = 30;

pub fn run(
    bus: &HubBus,
    symbol: &str,
    work: Duration,
    show_progress: bool,
) -> HubResult<TrainingStatus> {
    bus.dir().ensure_symbol_dir(symbol)?;

    let started_at = now_ts();
    let training = TrainingStatus {
        coin: symbol.to_string(),
        state: TrainingState::Training,
        started_at,
        finished_at: None,
        timestamp: started_at,
    };
    bus.publish(&bus.dir().trainer_status(symbol), &training)?;
    info!("{}: training started", symbol);

    simulate_work(symbol, work, show_progress);

    let finished_at = now_ts();
    bus.publish_text(
        &bus.dir().trainer_last_time(symbol),
        &format!("{}\n", finished_at),
    )?;

    let finished = TrainingStatus {
        coin: symbol.to_string(),
        state: TrainingState::Finished,
        started_at,
        finished_at: Some(finished_at),
        timestamp: finished_at,
    };
    bus.publish(&bus.dir().trainer_status(symbol), &finished)?;
    info!("{}: training finished", symbol);

    Ok(finished)
}

/// Fixed simulated work duration, split into ticks for the progress display.
fn simulate_work(symbol: &str, work: Duration, show_progress: bool) {
    if work.is_zero() {
        return;
    }

    let progress = if show_progress {
        TrainingProgress::new(symbol, WORK_TICKS as u64)
    } else {
        TrainingProgress::hidden(WORK_TICKS as u64)
    };

    let slice = work / WORK_TICKS;
    for _ in 0..WORK_TICKS {
        thread::sleep(slice);
        progress.tick();
    }
    progress.finish(symbol);
}
