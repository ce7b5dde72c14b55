// Decision consumer entry point

use clap::Parser;
use std::path::Path;
use std::process;
use tracing::{error, info};

use powertrader_hub::{roles, HubBus, RandomSignalSource, Settings, StateDir};

#[derive(Parser)]
#[command(name = "pt-trader")]
#[command(about = "Derive trade decisions from published signals and republish account status")]
struct Cli {
    /// Base directory of the shared state tree
    #[arg(short, long, default_value = ".")]
    data_dir: String,

    /// Settings file with the tracked symbol list
    #[arg(short, long, default_value = powertrader_hub::DEFAULT_SETTINGS_FILE)]
    settings: String,

    /// Access credential file; must be owner-only or the run is refused
    #[arg(short, long, default_value = powertrader_hub::DEFAULT_CREDENTIALS_FILE)]
    credentials: String,

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

    match roles::trader::run(&bus, &settings, Path::new(&cli.credentials), &mut source) {
        Ok(outcome) => {
            info!(
                "✅ cycle complete: {} buys, total account value {:.2}",
                outcome.buys, outcome.status.account.total_account_value
            );
        }
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    }
}
