//! Catalog entry structures: epochs, maps, headings, boosts, powers, synergies

use crate::settings::MapType;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Game phase tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Early,
    Mid,
    Late,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Early, Phase::Mid, Phase::Late];
}

/// Phase tags of one entry - never more than three
pub type PhaseTags = SmallVec<[Phase; 3]>;

/// Boost category. Serialized with the in-game heading names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Civ – Economy")]
    Economy,
    #[serde(rename = "Civ – Buildings, Walls & Towers")]
    Buildings,
    #[serde(rename = "Civ – General")]
    General,
    #[serde(rename = "Citizens & Fishing Boats")]
    Citizens,
    #[serde(rename = "Infantry – Ranged")]
    InfantryRanged,
    #[serde(rename = "Infantry – Sword / Spear")]
    InfantryMelee,
    #[serde(rename = "Cavalry – Ranged")]
    CavalryRanged,
    #[serde(rename = "Cavalry – Melee")]
    CavalryMelee,
    #[serde(rename = "Siege Weapons & Mobile AA")]
    Siege,
    #[serde(rename = "Ships")]
    Ships,
    #[serde(rename = "Tanks")]
    Tanks,
    #[serde(rename = "Aircraft")]
    Aircraft,
    #[serde(rename = "Cyber")]
    Cyber,
    #[serde(rename = "Religion")]
    Religion,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Economy => "Civ – Economy",
            Category::Buildings => "Civ – Buildings, Walls & Towers",
            Category::General => "Civ – General",
            Category::Citizens => "Citizens & Fishing Boats",
            Category::InfantryRanged => "Infantry – Ranged",
            Category::InfantryMelee => "Infantry – Sword / Spear",
            Category::CavalryRanged => "Cavalry – Ranged",
            Category::CavalryMelee => "Cavalry – Melee",
            Category::Siege => "Siege Weapons & Mobile AA",
            Category::Ships => "Ships",
            Category::Tanks => "Tanks",
            Category::Aircraft => "Aircraft",
            Category::Cyber => "Cyber",
            Category::Religion => "Religion",
        }
    }

    /// Categories that only exist on maps with naval support
    pub fn is_naval_only(&self) -> bool {
        matches!(self, Category::Ships)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chronological epoch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epoch {
    pub id: u8,
    pub name: String,
}

/// Terrain class of a map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapCategory {
    Land,
    Water,
    Mixed,
    Space,
}

/// Map metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapInfo {
    pub id: MapType,
    pub label: String,
    pub description: String,
    pub category: MapCategory,
    pub naval_support: bool,
    /// Space maps only become available once the match reaches this epoch
    #[serde(default)]
    pub min_epoch: Option<u8>,
}

impl MapInfo {
    /// Whether a match ending at `end_epoch` may be played on this map
    pub fn available_at(&self, end_epoch: u8) -> bool {
        self.min_epoch.map_or(true, |min| end_epoch >= min)
    }
}

/// Inflation rate and epoch gate of one boost category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryHeading {
    pub category: Category,
    pub bonus_cost: u32,
    pub min_epoch: u8,
}

/// Purchasable percentage modifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boost {
    pub name: String,
    pub base_cost: u32,
    pub category: Category,
    pub tags: PhaseTags,
}

/// Flat-cost special ability gated by an epoch range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivPower {
    pub name: String,
    pub cost: u32,
    pub min_epoch: u8,
    pub max_epoch: u8,
    pub tags: PhaseTags,
    #[serde(default)]
    pub description: String,
    /// Effect depends on match circumstances rather than applying flatly
    #[serde(default)]
    pub conditional: bool,
}

/// Named bonus triggered when every listed item is owned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyRule {
    pub name: String,
    pub items: Vec<String>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&Category::InfantryMelee).unwrap();
        assert_eq!(json, "\"Infantry – Sword / Spear\"");
        let parsed: Category = serde_json::from_str("\"Civ – Economy\"").unwrap();
        assert_eq!(parsed, Category::Economy);
    }

    #[test]
    fn test_map_available_at() {
        let map = MapInfo {
            id: MapType::PlanetsMars,
            label: "Planets – Mars".to_string(),
            description: String::new(),
            category: MapCategory::Space,
            naval_support: false,
            min_epoch: Some(14),
        };
        assert!(!map.available_at(13));
        assert!(map.available_at(14));
    }
}
