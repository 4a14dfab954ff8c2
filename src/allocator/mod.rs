//! Loadout allocation module
//!
//! Filters the catalog down to what a match allows, prices purchases with
//! per-category inflation and spends each player's budget according to the
//! resolved point-usage mode.

mod allocate;
mod eligibility;
mod ledger;
mod strategy;


pub use allocate::*;
pub use eligibility::*;
pub use ledger::*;
pub use strategy::{select_efficient, select_exact, select_loose, Pick};
