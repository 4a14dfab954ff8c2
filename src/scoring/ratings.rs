//! Early / Mid / Late phase ratings

use crate::allocator::{Candidate, GeneratedItem};
use crate::catalog::{Catalog, CatalogItem, Phase, PhaseTags};
use serde::{Deserialize, Serialize};

/// 0-100 strength estimate per game phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseRatings {
    pub early: u8,
    pub mid: u8,
    pub late: u8,
}

impl PhaseRatings {
    pub fn get(&self, phase: Phase) -> u8 {
        match phase {
            Phase::Early => self.early,
            Phase::Mid => self.mid,
            Phase::Late => self.late,
        }
    }

    fn set(&mut self, phase: Phase, value: u8) {
        match phase {
            Phase::Early => self.early = value,
            Phase::Mid => self.mid = value,
            Phase::Late => self.late = value,
        }
    }

    pub fn max(&self) -> u8 {
        self.early.max(self.mid).max(self.late)
    }

    pub fn min(&self) -> u8 {
        self.early.min(self.mid).min(self.late)
    }
}

/// Normalization cap per phase: the base cost of everything eligible and
/// tagged with that phase, capped at 100.
pub fn phase_caps(candidates: &[Candidate<'_>]) -> [u32; 3] {
    let mut caps = [0u32; 3];
    for (slot, phase) in Phase::ALL.iter().enumerate() {
        let total: u32 = candidates
            .iter()
            .filter(|c| c.tags().contains(phase))
            .map(|c| c.base_cost())
            .sum();
        caps[slot] = total.min(100);
    }
    caps
}

/// Phase tags of a generated item, looked up by name
pub fn item_tags<'a>(item: &GeneratedItem, catalog: &'a Catalog) -> Option<&'a PhaseTags> {
    match catalog.lookup(&item.name)? {
        CatalogItem::Boost(boost) => Some(&boost.tags),
        CatalogItem::Power(power) => Some(&power.tags),
    }
}

/// Charged points spent on items tagged with `phase`
pub fn phase_spend(items: &[GeneratedItem], catalog: &Catalog, phase: Phase) -> u32 {
    items
        .iter()
        .filter(|item| item_tags(item, catalog).map_or(false, |tags| tags.contains(&phase)))
        .map(|item| item.cost)
        .sum()
}

/// Rate each phase as spend over cap, scaled to 0-100. A zero cap rates 0.
pub fn rate_phases(items: &[GeneratedItem], catalog: &Catalog, caps: [u32; 3]) -> PhaseRatings {
    let mut ratings = PhaseRatings::default();
    for (slot, phase) in Phase::ALL.into_iter().enumerate() {
        let cap = caps[slot];
        if cap == 0 {
            continue;
        }
        let spend = phase_spend(items, catalog, phase) as f64;
        let value = (spend / cap as f64 * 100.0).round().clamp(0.0, 100.0);
        ratings.set(phase, value as u8);
    }
    ratings
}
