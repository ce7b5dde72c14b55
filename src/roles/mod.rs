// Run-to-completion role implementations shared by the binaries

pub mod console;
pub mod thinker;
pub mod trader;
pub mod trainer;
