// PowerTrader Hub Library
//
// A toy multi-process trading simulator whose processes coordinate solely
// through files in a shared directory tree: atomic publication, append-only
// event logs, and permission enforcement, with pseudo-random values standing
// in for real market data.

pub mod config;
pub mod core;
pub mod credentials;
pub mod error;
pub mod progress;
pub mod roles;
pub mod signals;
pub mod types;

// Re-export error types
pub use error::{HubError, HubResult};

// Re-export the coordination core
pub use core::{HubBus, Stamped, StateDir};

// Re-export configuration and credentials
pub use config::{Settings, DEFAULT_SETTINGS_FILE};
pub use credentials::{Credentials, DEFAULT_CREDENTIALS_FILE};

// Re-export signal generation
pub use signals::{BoundaryLadder, RandomSignalSource, SignalSource};

// Re-export shared record types
pub use types::{
    AccountStatus, AccountValuePoint, PnlLedger, ReadinessMarker, Side, TradeEvent, TrainingState,
    TrainingStatus,
};
