// Coordination core: the cross-process file protocol

pub mod atomic;
pub mod bus;
pub mod layout;

// Re-export commonly used types
pub use bus::{HubBus, Stamped};
pub use layout::StateDir;
