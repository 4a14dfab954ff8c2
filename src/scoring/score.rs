//! Power score and difficulty classification

use super::PhaseRatings;
use crate::allocator::GeneratedItem;
use crate::catalog::{Catalog, CatalogItem, Category};
use crate::settings::{ScoringTuning, BUDGET};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complexity bucket of a loadout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic 0-100 strength of a loadout.
///
/// Rewards spending the budget, owning powers (capped) and, for non-empty
/// loadouts, an even spread across the three phases.
pub fn power_score(
    points_spent: u32,
    powers: usize,
    ratings: &PhaseRatings,
    tuning: &ScoringTuning,
) -> u8 {
    let spend = tuning.spend_weight * points_spent.min(BUDGET) as f64 / BUDGET as f64;
    let rarity = (powers as f64 * tuning.power_rarity_bonus).min(tuning.power_rarity_cap);
    let spread = if points_spent > 0 {
        let gap = (ratings.max() - ratings.min()) as f64;
        tuning.spread_weight * (1.0 - gap / 100.0)
    } else {
        0.0
    };

    (spend + rarity + spread).round().clamp(0.0, 100.0) as u8
}

#[inline]
pub fn is_legendary(score: u8, tuning: &ScoringTuning) -> bool {
    score >= tuning.legendary_threshold
}

/// Distinct groups touched plus weighted conditional powers
pub fn complexity(items: &[GeneratedItem], catalog: &Catalog, tuning: &ScoringTuning) -> u32 {
    let mut groups: AHashSet<Option<Category>> = AHashSet::new();
    let mut conditional = 0u32;

    for item in items {
        groups.insert(item.category);
        if let Some(CatalogItem::Power(power)) = catalog.lookup(&item.name) {
            if power.conditional {
                conditional += 1;
            }
        }
    }

    groups.len() as u32 + tuning.conditional_power_weight * conditional
}

pub fn classify_difficulty(
    items: &[GeneratedItem],
    catalog: &Catalog,
    tuning: &ScoringTuning,
) -> Difficulty {
    let complexity = complexity(items, catalog, tuning);
    if complexity >= tuning.advanced_threshold {
        Difficulty::Advanced
    } else if complexity >= tuning.intermediate_threshold {
        Difficulty::Intermediate
    } else {
        Difficulty::Beginner
    }
}
