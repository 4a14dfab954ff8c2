//! Static game catalog
//!
//! Immutable tables of epochs, maps, category headings, boosts, civilization
//! powers and synergy rules, plus name indices for fast lookup. The built-in
//! catalog is constructed once per process; custom catalogs can be loaded
//! from JSON.

pub mod cache;
mod data;
mod item;

#[cfg(test)]
mod property_tests;

pub use cache::*;
pub use data::builtin_tables;
pub use item::*;

use crate::error::{ForgeError, Result};
use crate::settings::MapType;
use ahash::{AHashMap, AHashSet};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Raw catalog tables, as stored in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogTables {
    pub epochs: Vec<Epoch>,
    pub maps: Vec<MapInfo>,
    pub headings: Vec<CategoryHeading>,
    pub boosts: Vec<Boost>,
    pub powers: Vec<CivPower>,
    pub synergies: Vec<SynergyRule>,
}

/// A catalog entry found by name
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogItem<'a> {
    Boost(&'a Boost),
    Power(&'a CivPower),
}

#[derive(Debug, Clone, Copy)]
enum ItemIndex {
    Boost(usize),
    Power(usize),
}

/// Indexed, read-only game catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: CatalogTables,
    maps_by_type: AHashMap<MapType, usize>,
    headings_by_category: AHashMap<Category, usize>,
    items_by_name: AHashMap<String, ItemIndex>,
}

static BUILTIN_CATALOG: Lazy<Arc<Catalog>> =
    Lazy::new(|| Arc::new(Catalog::index(data::builtin_tables())));

impl Catalog {
    /// Validate tables and build the catalog
    pub fn new(tables: CatalogTables) -> Result<Self> {
        validate_tables(&tables)?;
        Ok(Self::index(tables))
    }

    /// Parse and validate a JSON catalog
    pub fn from_json(json: &str) -> Result<Self> {
        let tables: CatalogTables = serde_json::from_str(json)?;
        Self::new(tables)
    }

    /// Shared handle to the game's own catalog
    pub fn builtin() -> Arc<Catalog> {
        BUILTIN_CATALOG.clone()
    }

    fn index(tables: CatalogTables) -> Self {
        let maps_by_type = tables
            .maps
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id, i))
            .collect();
        let headings_by_category = tables
            .headings
            .iter()
            .enumerate()
            .map(|(i, h)| (h.category, i))
            .collect();

        let mut items_by_name =
            AHashMap::with_capacity(tables.boosts.len() + tables.powers.len());
        for (i, boost) in tables.boosts.iter().enumerate() {
            items_by_name.insert(boost.name.clone(), ItemIndex::Boost(i));
        }
        for (i, power) in tables.powers.iter().enumerate() {
            items_by_name.insert(power.name.clone(), ItemIndex::Power(i));
        }

        for rule in &tables.synergies {
            for name in &rule.items {
                if !items_by_name.contains_key(name) {
                    tracing::debug!(
                        synergy = %rule.name,
                        item = %name,
                        "synergy references an item missing from the catalog"
                    );
                }
            }
        }

        Self {
            tables,
            maps_by_type,
            headings_by_category,
            items_by_name,
        }
    }

    pub fn tables(&self) -> &CatalogTables {
        &self.tables
    }

    pub fn epochs(&self) -> &[Epoch] {
        &self.tables.epochs
    }

    pub fn maps(&self) -> &[MapInfo] {
        &self.tables.maps
    }

    pub fn headings(&self) -> &[CategoryHeading] {
        &self.tables.headings
    }

    pub fn boosts(&self) -> &[Boost] {
        &self.tables.boosts
    }

    pub fn powers(&self) -> &[CivPower] {
        &self.tables.powers
    }

    pub fn synergies(&self) -> &[SynergyRule] {
        &self.tables.synergies
    }

    /// First epoch id
    pub fn min_epoch(&self) -> u8 {
        self.tables.epochs.first().map(|e| e.id).unwrap_or(1)
    }

    /// Last epoch id
    pub fn max_epoch(&self) -> u8 {
        self.tables.epochs.last().map(|e| e.id).unwrap_or(1)
    }

    pub fn epoch_name(&self, id: u8) -> Option<&str> {
        self.tables
            .epochs
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.as_str())
    }

    pub fn map_info(&self, map: MapType) -> Option<&MapInfo> {
        self.maps_by_type.get(&map).map(|&i| &self.tables.maps[i])
    }

    pub fn heading(&self, category: Category) -> Option<&CategoryHeading> {
        self.headings_by_category
            .get(&category)
            .map(|&i| &self.tables.headings[i])
    }

    /// Position of a category in heading order, used for stable tie-breaks
    pub fn heading_rank(&self, category: Category) -> usize {
        self.headings_by_category
            .get(&category)
            .copied()
            .unwrap_or(usize::MAX)
    }

    pub fn lookup(&self, name: &str) -> Option<CatalogItem<'_>> {
        match self.items_by_name.get(name)? {
            ItemIndex::Boost(i) => Some(CatalogItem::Boost(&self.tables.boosts[*i])),
            ItemIndex::Power(i) => Some(CatalogItem::Power(&self.tables.powers[*i])),
        }
    }
}

/// Structural checks for a catalog loaded from outside the crate
fn validate_tables(tables: &CatalogTables) -> Result<()> {
    if tables.epochs.is_empty() {
        return Err(ForgeError::InvalidCatalog("no epochs".to_string()));
    }
    for pair in tables.epochs.windows(2) {
        if pair[1].id <= pair[0].id {
            return Err(ForgeError::InvalidCatalog(format!(
                "epoch ids must strictly increase ({} after {})",
                pair[1].id, pair[0].id
            )));
        }
    }
    let (first, last) = (tables.epochs[0].id, tables.epochs[tables.epochs.len() - 1].id);
    if first < 1 || last > 15 {
        return Err(ForgeError::InvalidCatalog(format!(
            "epoch ids must lie within 1..=15, got {}..={}",
            first, last
        )));
    }

    for map in MapType::ALL {
        if !tables.maps.iter().any(|m| m.id == map) {
            return Err(ForgeError::InvalidCatalog(format!("missing map: {}", map)));
        }
    }

    let mut categories = AHashSet::new();
    for heading in &tables.headings {
        if !categories.insert(heading.category) {
            return Err(ForgeError::InvalidCatalog(format!(
                "duplicate heading: {}",
                heading.category
            )));
        }
    }

    let mut names = AHashSet::new();
    for boost in &tables.boosts {
        if !categories.contains(&boost.category) {
            return Err(ForgeError::InvalidCatalog(format!(
                "boost {} has no heading for {}",
                boost.name, boost.category
            )));
        }
        if !names.insert(boost.name.as_str()) {
            return Err(ForgeError::InvalidCatalog(format!("duplicate item: {}", boost.name)));
        }
    }
    for power in &tables.powers {
        if power.min_epoch > power.max_epoch {
            return Err(ForgeError::InvalidCatalog(format!(
                "power {} has inverted epoch range {}..={}",
                power.name, power.min_epoch, power.max_epoch
            )));
        }
        if !names.insert(power.name.as_str()) {
            return Err(ForgeError::InvalidCatalog(format!("duplicate item: {}", power.name)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        let catalog = Catalog::new(builtin_tables()).unwrap();
        assert_eq!(catalog.epochs().len(), 15);
        assert_eq!(catalog.maps().len(), 12);
        assert_eq!(catalog.headings().len(), 14);
        assert_eq!(catalog.boosts().len(), 69);
        assert_eq!(catalog.powers().len(), 10);
        assert_eq!(catalog.synergies().len(), 8);
        assert_eq!(catalog.min_epoch(), 1);
        assert_eq!(catalog.max_epoch(), 15);
    }

    #[test]
    fn test_lookups() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.epoch_name(14), Some("Space Age"));
        assert_eq!(catalog.heading(Category::Economy).unwrap().bonus_cost, 6);
        assert!(!catalog.map_info(MapType::Continental).unwrap().naval_support);
        assert_eq!(catalog.map_info(MapType::PlanetsEarth).unwrap().min_epoch, Some(14));

        match catalog.lookup("Slavery") {
            Some(CatalogItem::Power(p)) => assert_eq!(p.cost, 10),
            other => panic!("unexpected lookup result: {:?}", other),
        }
        match catalog.lookup("20% Farming") {
            Some(CatalogItem::Boost(b)) => assert_eq!(b.category, Category::Economy),
            other => panic!("unexpected lookup result: {:?}", other),
        }
        assert!(catalog.lookup("20% Speed (Cavalry)").is_none());
    }

    #[test]
    fn test_json_catalog_roundtrip() {
        let json = serde_json::to_string(&builtin_tables()).unwrap();
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.tables(), Catalog::builtin().tables());
    }

    #[test]
    fn test_rejects_boost_without_heading() {
        let mut tables = builtin_tables();
        tables.headings.retain(|h| h.category != Category::Cyber);
        let err = Catalog::new(tables).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidCatalog(_)));
    }

    #[test]
    fn test_rejects_unordered_epochs() {
        let mut tables = builtin_tables();
        tables.epochs.swap(0, 1);
        assert!(Catalog::new(tables).is_err());
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let mut tables = builtin_tables();
        let dup = tables.boosts[0].clone();
        tables.boosts.push(dup);
        assert!(Catalog::new(tables).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Catalog::from_json("{\"epochs\": []").unwrap_err();
        assert!(matches!(err, ForgeError::DeserializationError(_)));
    }
}
