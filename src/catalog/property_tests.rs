//! Property tests for the catalog
//!
//! Name lookups agree with the tables, and structural validation rejects
//! tables that break its rules regardless of where the break happens.

use proptest::prelude::*;

use crate::catalog::{builtin_tables, Catalog, CatalogItem};

proptest! {
    /// Every boost and power is found by its exact name
    #[test]
    fn prop_lookup_matches_tables(index in 0..79usize) {
        let catalog = Catalog::builtin();
        let boosts = catalog.boosts().len();
        if index < boosts {
            let boost = &catalog.boosts()[index];
            prop_assert_eq!(catalog.lookup(&boost.name), Some(CatalogItem::Boost(boost)));
        } else {
            let power = &catalog.powers()[index - boosts];
            prop_assert_eq!(catalog.lookup(&power.name), Some(CatalogItem::Power(power)));
        }
    }

    /// Names outside the tables are never found
    #[test]
    fn prop_unknown_names_miss(name in "[a-z]{3,12} [0-9]{1,3}") {
        let catalog = Catalog::builtin();
        prop_assert!(catalog.lookup(&name).is_none());
    }

    /// Duplicating any item name invalidates the tables
    #[test]
    fn prop_duplicate_item_rejected(index in 0..69usize, power in any::<bool>()) {
        let mut tables = builtin_tables();
        if power {
            let mut copy = tables.powers[index % tables.powers.len()].clone();
            copy.cost += 1;
            tables.powers.push(copy);
        } else {
            let copy = tables.boosts[index].clone();
            tables.boosts.push(copy);
        }
        prop_assert!(Catalog::new(tables).is_err());
    }

    /// Inverting any power's epoch range invalidates the tables
    #[test]
    fn prop_inverted_power_range_rejected(index in 0..10usize) {
        let mut tables = builtin_tables();
        let power = &mut tables.powers[index];
        power.min_epoch = 15;
        power.max_epoch = 1;
        prop_assert!(Catalog::new(tables).is_err());
    }

    /// Removing any map invalidates the tables
    #[test]
    fn prop_missing_map_rejected(index in 0..12usize) {
        let mut tables = builtin_tables();
        tables.maps.remove(index);
        prop_assert!(Catalog::new(tables).is_err());
    }
}
