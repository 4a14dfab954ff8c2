//! Numeric calibration for allocation and scoring

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Points every player spends; fixed for every match and not calibratable
pub const BUDGET: u32 = 100;

/// Allocator calibration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AllocatorTuning {
    /// Weight multiplier for categories matching the player's archetype
    pub archetype_bias: f64,
    /// Base selection weight of a civilization power
    pub power_weight: f64,
    /// Value multiplier for powers when ranking by value-per-point
    pub power_rarity_value: f64,
    /// Extra value per phase tag beyond the first
    pub phase_coverage_value: f64,
    /// Relative jitter applied to efficient rankings
    pub efficient_jitter: f64,
    /// Chaos preset weight spread: weights scale into [1 - j, 1 + j]
    pub chaos_jitter: f64,
    /// Randomized fill attempts for exact mode
    pub exact_attempts: u32,
    /// Spend after which loose mode may stop early
    pub loose_min_spend: u32,
    /// Per-pick chance that loose mode stops once the minimum spend is reached
    pub loose_stop_chance: f64,
}

impl Default for AllocatorTuning {
    fn default() -> Self {
        Self {
            archetype_bias: 2.5,
            power_weight: 1.0,
            power_rarity_value: 3.0,
            phase_coverage_value: 0.25,
            efficient_jitter: 0.05,
            chaos_jitter: 0.75,
            exact_attempts: 64,
            loose_min_spend: 60,
            loose_stop_chance: 0.15,
        }
    }
}

/// Scoring and classification calibration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringTuning {
    /// Score contribution of a fully spent budget
    pub spend_weight: f64,
    /// Score per civilization power owned
    pub power_rarity_bonus: f64,
    pub power_rarity_cap: f64,
    /// Score contribution of perfectly even phase ratings
    pub spread_weight: f64,
    pub legendary_threshold: u8,
    /// Complexity points per conditionally-triggered power
    pub conditional_power_weight: u32,
    /// Minimum complexity for Intermediate
    pub intermediate_threshold: u32,
    /// Minimum complexity for Advanced
    pub advanced_threshold: u32,
    /// Late-phase spend that triggers the short-window warning
    pub late_heavy_points: u32,
    /// End epochs at or below this count as a short window
    pub short_window_end_epoch: u8,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            spend_weight: 60.0,
            power_rarity_bonus: 8.0,
            power_rarity_cap: 24.0,
            spread_weight: 16.0,
            legendary_threshold: 85,
            conditional_power_weight: 2,
            intermediate_threshold: 4,
            advanced_threshold: 8,
            late_heavy_points: 40,
            short_window_end_epoch: 6,
        }
    }
}

/// Complete engine calibration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    pub allocator: AllocatorTuning,
    pub scoring: ScoringTuning,
}

impl Tuning {
    /// Load a calibration; missing fields keep their defaults, unknown ones are rejected
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
