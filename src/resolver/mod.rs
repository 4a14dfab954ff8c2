//! Configuration resolution module

mod resolve;

#[cfg(test)]
mod property_tests;

pub use resolve::*;
