//! Forge engine module
//!
//! Entry points that run resolution, allocation and scoring end to end, and
//! the session type that carries a forged match through rerolls and export.

mod civ;
mod engine;
mod session;


pub use civ::*;
pub use engine::*;
pub use session::*;
