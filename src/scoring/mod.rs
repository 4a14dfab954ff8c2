//! Synergy and scoring module
//!
//! Turns a raw allocation into the presentation-ready parts of a civ:
//! synergies, phase ratings, power score, difficulty, narrative text,
//! warnings and the validity audit.

mod audit;
mod narrative;
mod ratings;
mod score;
mod synergy;


pub use audit::*;
pub use narrative::*;
pub use ratings::*;
pub use score::*;
pub use synergy::*;

use crate::allocator::{eligible_candidates, Allocation, EpochWindow};
use crate::catalog::{Catalog, SynergyRule};
use crate::error::{ForgeError, Result};
use crate::settings::{Archetype, ResolvedMatchConfig, Tuning};

/// Everything scoring derives from one allocation
#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard {
    pub ratings: PhaseRatings,
    pub power_score: u8,
    pub legendary: bool,
    pub difficulty: Difficulty,
    pub synergies: Vec<SynergyRule>,
    pub primary_category: Option<String>,
    pub summary: String,
    pub reasoning: String,
    pub warnings: Vec<String>,
    pub is_valid: bool,
}

/// Score an allocation in the context of its resolved match
pub fn score_loadout(
    allocation: &Allocation,
    resolved: &ResolvedMatchConfig,
    archetype: Archetype,
    catalog: &Catalog,
    tuning: &Tuning,
) -> Result<Scorecard> {
    let map = catalog.map_info(resolved.map_type).ok_or_else(|| {
        ForgeError::IntegrityViolation(vec![format!("map_type: {}", resolved.map_type)])
    })?;
    let items = &allocation.items;
    let window = EpochWindow::new(resolved.start_epoch, resolved.end_epoch);

    let caps = phase_caps(&eligible_candidates(catalog, window, map));
    let ratings = rate_phases(items, catalog, caps);

    let powers = items.iter().filter(|item| item.is_power()).count();
    let power_score = power_score(allocation.points_spent, powers, &ratings, &tuning.scoring);
    let synergies = detect_synergies(items, catalog);
    let primary_category = primary_category(items, catalog);

    let issues = audit_loadout(items, allocation.points_spent, resolved, catalog);
    if !issues.is_empty() {
        tracing::warn!(?issues, "loadout failed audit");
    }

    Ok(Scorecard {
        ratings,
        power_score,
        legendary: is_legendary(power_score, &tuning.scoring),
        difficulty: classify_difficulty(items, catalog, &tuning.scoring),
        summary: compose_summary(archetype, primary_category.as_deref(), synergies.len()),
        reasoning: compose_reasoning(resolved, archetype, items, allocation.points_spent),
        warnings: collect_warnings(resolved, archetype, items, catalog, map, &tuning.scoring),
        synergies,
        primary_category,
        is_valid: issues.is_empty(),
    })
}
