// Training state machine entry point

use clap::Parser;
use std::process;
use std::time::Duration;
use tracing::{error, info};

use powertrader_hub::{roles, HubBus, StateDir};

#[derive(Parser)]
#[command(name = "pt-trainer")]
#[command(about = "Run one simulated training lifecycle for a symbol")]
struct Cli {
    /// Symbol to train
    #[arg(default_value = "BTC")]
    symbol: String,

    /// Base directory of the shared state tree
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// Simulated work duration in seconds
    #[arg(long, default_value = "3")]
    duration_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    std::env::set_var("RUST_LOG", if cli.verbose { "debug" } else { "info" });
    tracing_subscriber::fmt::init();

    let bus = HubBus::new(StateDir::new(&cli.data_dir));
    let work = Duration::from_secs(cli.duration_secs);

    match roles::trainer::run(&bus, &cli.symbol, work, true) {
        Ok(status) => {
            info!(
                "✅ {} trained in {}s",
                status.coin,
                status.finished_at.unwrap_or(status.started_at) - status.started_at
            );
        }
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    }
}
