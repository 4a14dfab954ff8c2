//! Post-generation loadout audit

use crate::allocator::{is_boost_eligible, is_power_eligible, EpochWindow, GeneratedItem, ItemKind};
use crate::catalog::{Catalog, CatalogItem};
use crate::settings::{ResolvedMatchConfig, BUDGET};
use ahash::AHashMap;

/// Re-check a finished loadout against the match it was built for.
///
/// Returns one message per problem; an empty list means the loadout is valid.
pub fn audit_loadout(
    items: &[GeneratedItem],
    points_spent: u32,
    resolved: &ResolvedMatchConfig,
    catalog: &Catalog,
) -> Vec<String> {
    let mut issues = Vec::new();

    let total: u32 = items.iter().map(|item| item.cost).sum();
    if total != points_spent {
        issues.push(format!("points_spent {} != item total {}", points_spent, total));
    }
    if points_spent > BUDGET {
        issues.push(format!("points_spent {} exceeds budget {}", points_spent, BUDGET));
    }

    let Some(map) = catalog.map_info(resolved.map_type) else {
        issues.push(format!("unknown map {}", resolved.map_type));
        return issues;
    };
    let window = EpochWindow::new(resolved.start_epoch, resolved.end_epoch);
    let mut purchases: AHashMap<_, u32> = AHashMap::new();

    for item in items {
        match (catalog.lookup(&item.name), item.kind) {
            (Some(CatalogItem::Boost(boost)), ItemKind::Boost) => {
                let Some(heading) = catalog.heading(boost.category) else {
                    issues.push(format!("{}: no heading", item.name));
                    continue;
                };
                if !is_boost_eligible(heading, window, catalog.max_epoch(), map) {
                    issues.push(format!("{}: not eligible", item.name));
                }
                let prior = purchases.entry(boost.category).or_insert(0);
                let expected = *prior * heading.bonus_cost;
                *prior += 1;
                if item.original_cost != boost.base_cost
                    || item.inflation_applied != expected
                    || item.cost != boost.base_cost + expected
                {
                    issues.push(format!("{}: inconsistent inflation", item.name));
                }
            }
            (Some(CatalogItem::Power(power)), ItemKind::Power) => {
                if !is_power_eligible(power, window) {
                    issues.push(format!("{}: not eligible", item.name));
                }
                if item.cost != power.cost || item.inflation_applied != 0 {
                    issues.push(format!("{}: powers are never inflated", item.name));
                }
            }
            _ => issues.push(format!("{}: not a catalog {:?}", item.name, item.kind)),
        }
    }

    issues
}
