//! Match configuration as entered by players, and its resolved form

use crate::error::Result;
use serde::{Deserialize, Serialize};

use super::{Archetype, GameSpeed, MapSize, MapType, PointUsage, Preset, Resources};

/// Default player names used when a roster is created from a player count
pub const DEFAULT_PLAYER_NAMES: [&str; 10] = [
    "Taco", "Piert", "DjonLuc", "Justin", "Naldo", "Pash", "Kuban", "Player 8", "Player 9",
    "Player 10",
];

/// A setting that is either fixed or drawn from an allowed pool at resolution time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting<T> {
    Fixed(T),
    RandomFromPool(Vec<T>),
}

impl<T> Setting<T> {
    pub fn fixed(value: T) -> Self {
        Setting::Fixed(value)
    }

    pub fn random(pool: impl Into<Vec<T>>) -> Self {
        Setting::RandomFromPool(pool.into())
    }

    /// Every value this setting could resolve to
    pub fn candidates(&self) -> &[T] {
        match self {
            Setting::Fixed(value) => std::slice::from_ref(value),
            Setting::RandomFromPool(pool) => pool,
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, Setting::RandomFromPool(_))
    }
}

/// End epoch, fixed or drawn uniformly from an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpochChoice {
    Fixed(u8),
    RandomRange { min: u8, max: u8 },
}

impl EpochChoice {
    /// Lowest end epoch this choice can produce
    pub fn lowest(&self) -> u8 {
        match *self {
            EpochChoice::Fixed(epoch) => epoch,
            EpochChoice::RandomRange { min, .. } => min,
        }
    }

    pub fn highest(&self) -> u8 {
        match *self {
            EpochChoice::Fixed(epoch) => epoch,
            EpochChoice::RandomRange { max, .. } => max,
        }
    }
}

/// One roster entry. A missing archetype is resolved randomly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSlot {
    pub name: String,
    #[serde(default)]
    pub archetype: Option<Archetype>,
}

impl PlayerSlot {
    pub fn new(name: impl Into<String>, archetype: Option<Archetype>) -> Self {
        Self {
            name: name.into(),
            archetype,
        }
    }
}

/// Match configuration before resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub seed: String,
    pub players: Vec<PlayerSlot>,
    pub start_epoch: u8,
    pub end_epoch: EpochChoice,
    pub map_type: Setting<MapType>,
    pub preset: Setting<Preset>,
    pub point_usage: Setting<PointUsage>,
    pub map_size: Setting<MapSize>,
    pub resources: Setting<Resources>,
    pub game_speed: Setting<GameSpeed>,
}

impl MatchConfig {
    /// Create the default setup: Casual, Efficient, Continental, all epochs,
    /// every archetype left to chance.
    pub fn new(seed: impl Into<String>, num_players: usize) -> Self {
        let players = (0..num_players)
            .map(|i| {
                let name = DEFAULT_PLAYER_NAMES
                    .get(i)
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("Player {}", i + 1));
                PlayerSlot::new(name, None)
            })
            .collect();

        Self {
            seed: seed.into(),
            players,
            start_epoch: 1,
            end_epoch: EpochChoice::Fixed(15),
            map_type: Setting::Fixed(MapType::Continental),
            preset: Setting::Fixed(Preset::Casual),
            point_usage: Setting::Fixed(PointUsage::Efficient),
            map_size: Setting::Fixed(MapSize::Large),
            resources: Setting::Fixed(Resources::Standard),
            game_speed: Setting::Fixed(GameSpeed::Standard),
        }
    }

    /// Decode a configuration from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A player with a concrete archetype
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPlayer {
    pub name: String,
    pub archetype: Archetype,
}

/// Fully concrete match configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMatchConfig {
    pub seed: String,
    pub players: Vec<ResolvedPlayer>,
    pub start_epoch: u8,
    pub end_epoch: u8,
    pub map_type: MapType,
    pub preset: Preset,
    pub point_usage: PointUsage,
    pub map_size: MapSize,
    pub resources: Resources,
    pub game_speed: GameSpeed,
}

impl ResolvedMatchConfig {
    /// Seed driving the first generation of a player's loadout
    pub fn player_seed(&self, player_name: &str, index: usize) -> String {
        format!("{}-{}-{}", self.seed, player_name, index)
    }

    /// Seed driving a player's one-time reroll
    pub fn reroll_seed(&self, player_name: &str, index: usize) -> String {
        format!("{}-{}-{}-REROLL", self.seed, player_name, index)
    }

    pub fn player(&self, index: usize) -> Option<&ResolvedPlayer> {
        self.players.get(index)
    }
}
