//! Per-category purchase counts and inflated prices

use super::Candidate;
use crate::catalog::Category;
use ahash::AHashMap;

/// Quoted price for the next purchase of one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub cost: u32,
    pub original_cost: u32,
    pub inflation: u32,
    /// 1-based position of this purchase within its category (0 for powers)
    pub ordinal: u32,
}

/// Tracks how many items one player has bought in each category.
///
/// The Nth purchase in a category costs `base + (N - 1) * bonus_cost`.
/// Civilization powers are never inflated.
#[derive(Debug, Clone, Default)]
pub struct InflationLedger {
    purchases: AHashMap<Category, u32>,
}

impl InflationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn purchases_in(&self, category: Category) -> u32 {
        self.purchases.get(&category).copied().unwrap_or(0)
    }

    pub fn quote(&self, candidate: &Candidate<'_>) -> PriceQuote {
        match candidate {
            Candidate::Boost { boost, heading } => {
                let prior = self.purchases_in(boost.category);
                let inflation = prior * heading.bonus_cost;
                PriceQuote {
                    cost: boost.base_cost + inflation,
                    original_cost: boost.base_cost,
                    inflation,
                    ordinal: prior + 1,
                }
            }
            Candidate::Power(power) => PriceQuote {
                cost: power.cost,
                original_cost: power.cost,
                inflation: 0,
                ordinal: 0,
            },
        }
    }

    /// Record a purchase and return the price actually charged
    pub fn purchase(&mut self, candidate: &Candidate<'_>) -> PriceQuote {
        let quote = self.quote(candidate);
        if let Some(category) = candidate.category() {
            *self.purchases.entry(category).or_insert(0) += 1;
        }
        quote
    }
}
