//! Schema module - Configuration and observable types for evolution runs.

mod alphabet;
mod config;
mod evolution;
mod individual;
mod session;

pub use alphabet::*;
pub use config::*;
pub use evolution::*;
pub use individual::*;
pub use session::*;
