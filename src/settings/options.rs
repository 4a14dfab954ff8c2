//! Concrete option domains for match settings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player strategic archetype. `None` in a player slot stands for "Random".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Economic,
    Aggressive,
    Defensive,
    Naval,
    Balanced,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::Economic,
        Archetype::Aggressive,
        Archetype::Defensive,
        Archetype::Naval,
        Archetype::Balanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Economic => "Economic",
            Archetype::Aggressive => "Aggressive",
            Archetype::Defensive => "Defensive",
            Archetype::Naval => "Naval",
            Archetype::Balanced => "Balanced",
        }
    }
}

/// Ruleset preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    Casual,
    Tournament,
    Chaos,
    Historical,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Casual,
        Preset::Tournament,
        Preset::Chaos,
        Preset::Historical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Casual => "Casual",
            Preset::Tournament => "Tournament",
            Preset::Chaos => "Chaos",
            Preset::Historical => "Historical",
        }
    }

    /// Tournament locks individual rerolls
    pub fn allows_reroll(&self) -> bool {
        !matches!(self, Preset::Tournament)
    }
}

/// How the allocator spends the point budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointUsage {
    Efficient,
    Exact,
    Loose,
}

impl PointUsage {
    pub const ALL: [PointUsage; 3] = [PointUsage::Efficient, PointUsage::Exact, PointUsage::Loose];

    pub fn as_str(&self) -> &'static str {
        match self {
            PointUsage::Efficient => "Efficient",
            PointUsage::Exact => "Exact",
            PointUsage::Loose => "Loose",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapSize {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
}

impl MapSize {
    pub const ALL: [MapSize; 5] = [
        MapSize::Tiny,
        MapSize::Small,
        MapSize::Medium,
        MapSize::Large,
        MapSize::Huge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapSize::Tiny => "Tiny",
            MapSize::Small => "Small",
            MapSize::Medium => "Medium",
            MapSize::Large => "Large",
            MapSize::Huge => "Huge",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resources {
    Low,
    Standard,
    High,
}

impl Resources {
    pub const ALL: [Resources; 3] = [Resources::Low, Resources::Standard, Resources::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resources::Low => "Low",
            Resources::Standard => "Standard",
            Resources::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameSpeed {
    Slow,
    Standard,
    Fast,
}

impl GameSpeed {
    pub const ALL: [GameSpeed; 3] = [GameSpeed::Slow, GameSpeed::Standard, GameSpeed::Fast];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameSpeed::Slow => "Slow",
            GameSpeed::Standard => "Standard",
            GameSpeed::Fast => "Fast",
        }
    }
}

/// Map identifiers. Labels use the game's en-dash naming for planet maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapType {
    Continental,
    Mediterranean,
    Highlands,
    Plains,
    #[serde(rename = "Large Islands")]
    LargeIslands,
    #[serde(rename = "Small Islands")]
    SmallIslands,
    #[serde(rename = "Tournament Islands")]
    TournamentIslands,
    #[serde(rename = "Planets – Earth")]
    PlanetsEarth,
    #[serde(rename = "Planets – Large")]
    PlanetsLarge,
    #[serde(rename = "Planets – Small")]
    PlanetsSmall,
    #[serde(rename = "Planets – Mars")]
    PlanetsMars,
    #[serde(rename = "Planets – Satellite")]
    PlanetsSatellite,
}

impl MapType {
    pub const ALL: [MapType; 12] = [
        MapType::Continental,
        MapType::Mediterranean,
        MapType::Highlands,
        MapType::Plains,
        MapType::LargeIslands,
        MapType::SmallIslands,
        MapType::TournamentIslands,
        MapType::PlanetsEarth,
        MapType::PlanetsLarge,
        MapType::PlanetsSmall,
        MapType::PlanetsMars,
        MapType::PlanetsSatellite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapType::Continental => "Continental",
            MapType::Mediterranean => "Mediterranean",
            MapType::Highlands => "Highlands",
            MapType::Plains => "Plains",
            MapType::LargeIslands => "Large Islands",
            MapType::SmallIslands => "Small Islands",
            MapType::TournamentIslands => "Tournament Islands",
            MapType::PlanetsEarth => "Planets – Earth",
            MapType::PlanetsLarge => "Planets – Large",
            MapType::PlanetsSmall => "Planets – Small",
            MapType::PlanetsMars => "Planets – Mars",
            MapType::PlanetsSatellite => "Planets – Satellite",
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display!(Archetype, Preset, PointUsage, MapSize, Resources, GameSpeed, MapType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_type_serde_uses_display_labels() {
        let json = serde_json::to_string(&MapType::PlanetsMars).unwrap();
        assert_eq!(json, "\"Planets – Mars\"");

        let parsed: MapType = serde_json::from_str("\"Small Islands\"").unwrap();
        assert_eq!(parsed, MapType::SmallIslands);
    }

    #[test]
    fn test_tournament_locks_reroll() {
        assert!(!Preset::Tournament.allows_reroll());
        assert!(Preset::Casual.allows_reroll());
        assert!(Preset::Chaos.allows_reroll());
    }

    #[test]
    fn test_display_matches_as_str() {
        for map in MapType::ALL {
            assert_eq!(map.to_string(), map.as_str());
        }
        assert_eq!(Archetype::Naval.to_string(), "Naval");
    }
}
