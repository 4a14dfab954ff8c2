//! Match settings module
//!
//! Option domains, the player-facing match configuration with its
//! randomizable settings, the resolved configuration, and engine tuning.

mod match_config;
mod options;
mod tuning;

pub use match_config::*;
pub use options::*;
pub use tuning::*;
