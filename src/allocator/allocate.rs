//! Per-player loadout allocation

use super::strategy::{select_efficient, select_exact, select_loose, Pick};
use super::{eligible_candidates, Candidate, EpochWindow};
use crate::catalog::{Catalog, Category};
use crate::error::{ForgeError, Result};
use crate::random::SeededRng;
use crate::settings::{AllocatorTuning, Archetype, PointUsage, Preset, ResolvedMatchConfig};
use serde::{Deserialize, Serialize};

/// Whether a generated item is a boost or a civilization power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Boost,
    Power,
}

/// One purchased loadout entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItem {
    pub name: String,
    pub kind: ItemKind,
    /// Owning category (boosts only)
    pub category: Option<Category>,
    /// Points actually charged
    pub cost: u32,
    pub original_cost: u32,
    pub inflation_applied: u32,
    /// Power description (powers only)
    pub description: Option<String>,
    /// Why the allocator bought this item
    pub trace: String,
}

impl GeneratedItem {
    pub fn is_power(&self) -> bool {
        self.kind == ItemKind::Power
    }
}

/// Result of allocating one player's budget
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// Items in purchase order
    pub items: Vec<GeneratedItem>,
    pub points_spent: u32,
    /// Size of the eligible pool
    pub eligible: usize,
    /// Fill attempts used (exact mode; 1 otherwise)
    pub attempts: u32,
}

/// Categories an archetype favors
pub fn archetype_affinity(archetype: Archetype) -> &'static [Category] {
    match archetype {
        Archetype::Economic => &[Category::Economy],
        Archetype::Aggressive => &[
            Category::InfantryRanged,
            Category::InfantryMelee,
            Category::CavalryRanged,
            Category::CavalryMelee,
            Category::Siege,
            Category::Tanks,
        ],
        Archetype::Defensive => &[Category::Buildings],
        Archetype::Naval => &[Category::Ships],
        Archetype::Balanced => &[],
    }
}

/// Selection weight of one candidate before any preset jitter
pub fn base_weight(candidate: &Candidate<'_>, archetype: Archetype, tuning: &AllocatorTuning) -> f64 {
    match candidate.category() {
        None => tuning.power_weight,
        Some(category) if archetype_affinity(archetype).contains(&category) => tuning.archetype_bias,
        Some(_) => 1.0,
    }
}

fn weight_rationale(candidate: &Candidate<'_>, archetype: Archetype, weight: f64) -> String {
    match candidate.category() {
        None => format!("civilization power (weight {:.2})", weight),
        Some(category) if archetype_affinity(archetype).contains(&category) => {
            format!("{} favors {} (weight {:.2})", archetype, category, weight)
        }
        Some(_) => format!("neutral for {} (weight {:.2})", archetype, weight),
    }
}

fn eligibility_note(candidate: &Candidate<'_>, window: EpochWindow) -> String {
    match candidate {
        Candidate::Boost { heading, .. } => format!(
            "eligible from epoch {} within {}-{}",
            heading.min_epoch, window.start, window.end
        ),
        Candidate::Power(power) => format!(
            "power active in epochs {}-{} within {}-{}",
            power.min_epoch, power.max_epoch, window.start, window.end
        ),
    }
}

fn inflation_note(candidate: &Candidate<'_>, pick: &Pick) -> String {
    match candidate.category() {
        None => format!("flat {} points", pick.price.cost),
        Some(category) if pick.price.inflation > 0 => format!(
            "purchase #{} in {}, {} + {} inflation = {} points",
            pick.price.ordinal,
            category,
            pick.price.original_cost,
            pick.price.inflation,
            pick.price.cost
        ),
        Some(category) => format!(
            "purchase #{} in {} at base {} points",
            pick.price.ordinal, category, pick.price.cost
        ),
    }
}

/// Allocate one player's budget from their seed string.
///
/// Items are drawn from the pool eligible for the resolved window and map,
/// weighted by archetype and shaped by the point-usage mode. Exhausting the
/// pool is not an error: the loadout simply stops growing.
pub fn allocate_loadout(
    resolved: &ResolvedMatchConfig,
    catalog: &Catalog,
    archetype: Archetype,
    seed: &str,
    tuning: &AllocatorTuning,
) -> Result<Allocation> {
    let map = catalog.map_info(resolved.map_type).ok_or_else(|| {
        ForgeError::IntegrityViolation(vec![format!("map_type: {}", resolved.map_type)])
    })?;
    let window = EpochWindow::new(resolved.start_epoch, resolved.end_epoch);
    let candidates = eligible_candidates(catalog, window, map);

    let mut rng = SeededRng::from_seed_str(seed);

    let mut weights: Vec<f64> = candidates
        .iter()
        .map(|c| base_weight(c, archetype, tuning))
        .collect();
    if resolved.preset == Preset::Chaos {
        let spread = tuning.chaos_jitter.clamp(0.0, 1.0);
        for weight in weights.iter_mut() {
            *weight *= 1.0 - spread + 2.0 * spread * rng.next_float();
        }
    }

    let (picks, attempts) = match resolved.point_usage {
        PointUsage::Efficient => (select_efficient(&candidates, &weights, tuning, &mut rng), 1),
        PointUsage::Exact => select_exact(&candidates, &weights, tuning, &mut rng),
        PointUsage::Loose => (select_loose(&candidates, &weights, tuning, &mut rng), 1),
    };

    let items: Vec<GeneratedItem> = picks
        .iter()
        .map(|pick| {
            let candidate = &candidates[pick.candidate];
            let trace = [
                eligibility_note(candidate, window),
                inflation_note(candidate, pick),
                weight_rationale(candidate, archetype, weights[pick.candidate]),
                pick.rationale.clone(),
            ]
            .join("; ");

            let (kind, description) = match candidate {
                Candidate::Boost { .. } => (ItemKind::Boost, None),
                Candidate::Power(power) => (ItemKind::Power, Some(power.description.clone())),
            };

            GeneratedItem {
                name: candidate.name().to_string(),
                kind,
                category: candidate.category(),
                cost: pick.price.cost,
                original_cost: pick.price.original_cost,
                inflation_applied: pick.price.inflation,
                description,
                trace,
            }
        })
        .collect();

    let points_spent: u32 = items.iter().map(|item| item.cost).sum();

    tracing::debug!(
        seed,
        eligible = candidates.len(),
        items = items.len(),
        points_spent,
        mode = %resolved.point_usage,
        "allocated loadout"
    );

    Ok(Allocation {
        items,
        points_spent,
        eligible: candidates.len(),
        attempts,
    })
}
