//! Synergy detection

use crate::allocator::GeneratedItem;
use crate::catalog::{Catalog, SynergyRule};
use ahash::AHashSet;

/// Every rule whose items are all owned, in catalog order
pub fn detect_synergies(items: &[GeneratedItem], catalog: &Catalog) -> Vec<SynergyRule> {
    let owned: AHashSet<&str> = items.iter().map(|item| item.name.as_str()).collect();

    catalog
        .synergies()
        .iter()
        .filter(|rule| !rule.items.is_empty())
        .filter(|rule| rule.items.iter().all(|name| owned.contains(name.as_str())))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::ItemKind;

    fn named(name: &str) -> GeneratedItem {
        GeneratedItem {
            name: name.to_string(),
            kind: ItemKind::Boost,
            category: None,
            cost: 1,
            original_cost: 1,
            inflation_applied: 0,
            description: None,
            trace: String::new(),
        }
    }

    #[test]
    fn test_full_rule_matches_in_any_order() {
        let catalog = Catalog::builtin();
        let rule = &catalog.synergies()[0];
        let mut items: Vec<GeneratedItem> = rule.items.iter().rev().map(|n| named(n)).collect();
        items.push(named("20% Farming"));

        let found = detect_synergies(&items, &catalog);
        assert!(found.iter().any(|r| r.name == rule.name));
    }

    #[test]
    fn test_partial_rule_does_not_match() {
        let catalog = Catalog::builtin();
        let rule = &catalog.synergies()[0];
        let items: Vec<GeneratedItem> = rule.items.iter().skip(1).map(|n| named(n)).collect();

        let found = detect_synergies(&items, &catalog);
        assert!(found.iter().all(|r| r.name != rule.name));
    }

    #[test]
    fn test_empty_loadout_has_no_synergies() {
        let catalog = Catalog::builtin();
        assert!(detect_synergies(&[], &catalog).is_empty());
    }
}
