// Signal producer entry point

use clap::Parser;
use std::process;
use tracing::{error, info};

use powertrader_hub::{roles, HubBus, RandomSignalSource, Settings, StateDir};

#[derive(Parser)]
#[command(name = "pt-thinker")]
#[command(about = "Publish per-symbol boundary ladders and directional signals")]
struct Cli {
    /// Base directory of the shared state tree
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// Settings file with the tracked symbol list
    #[arg(short, long, default_value = powertrader_hub::DEFAULT_SETTINGS_FILE)]
    settings: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    std::env::set_var("RUST_LOG", if cli.verbose { "debug" } else { "info" });
    tracing_subscriber::fmt::init();

    let settings = Settings::load_or_default(&cli.settings);
    let bus = HubBus::new(StateDir::new(&cli.data_dir));
    let mut source = RandomSignalSource;

    match roles::thinker::run(&bus, &settings, &mut source) {
        Ok(marker) => info!("✅ published signals for {} symbols", marker.total_coins),
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    }
}
