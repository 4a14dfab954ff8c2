//! Seeded randomness module
//!
//! Every random draw in the engine goes through [`SeededRng`]; nothing reads
//! an unseeded global source.

mod seeded;
mod weighted;

#[cfg(test)]
mod property_tests;

pub use seeded::*;
pub use weighted::*;
