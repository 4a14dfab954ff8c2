//! Point-usage selection policies

use super::{Candidate, InflationLedger, PriceQuote};
use crate::random::{weighted_index, SeededRng};
use crate::settings::{AllocatorTuning, BUDGET};

/// One purchase made by a policy
#[derive(Debug, Clone, PartialEq)]
pub struct Pick {
    /// Index into the candidate list
    pub candidate: usize,
    pub price: PriceQuote,
    /// Why the policy took it
    pub rationale: String,
}

/// Purchase state of one selection pass
#[derive(Debug, Clone)]
struct Basket {
    ledger: InflationLedger,
    taken: Vec<bool>,
    spent: u32,
    picks: Vec<Pick>,
}

impl Basket {
    fn new(candidates: usize) -> Self {
        Self {
            ledger: InflationLedger::new(),
            taken: vec![false; candidates],
            spent: 0,
            picks: Vec::new(),
        }
    }

    /// Current price of every untaken candidate that fits the remaining budget
    fn affordable(&self, candidates: &[Candidate<'_>]) -> Vec<(usize, PriceQuote)> {
        let remaining = BUDGET.saturating_sub(self.spent);
        candidates
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.taken[*i])
            .map(|(i, c)| (i, self.ledger.quote(c)))
            .filter(|(_, quote)| quote.cost <= remaining)
            .collect()
    }

    fn buy(&mut self, candidates: &[Candidate<'_>], index: usize, rationale: String) {
        let price = self.ledger.purchase(&candidates[index]);
        self.taken[index] = true;
        self.spent += price.cost;
        self.picks.push(Pick {
            candidate: index,
            price,
            rationale,
        });
    }
}

/// Intrinsic value of a candidate before price is considered
fn candidate_value(candidate: &Candidate<'_>, tuning: &AllocatorTuning) -> f64 {
    let extra_phases = candidate.tags().len().saturating_sub(1) as f64;
    let coverage = 1.0 + tuning.phase_coverage_value * extra_phases;
    if candidate.is_power() {
        coverage * tuning.power_rarity_value
    } else {
        coverage
    }
}

/// Greedy by weighted value per point until nothing fits
pub fn select_efficient(
    candidates: &[Candidate<'_>],
    weights: &[f64],
    tuning: &AllocatorTuning,
    rng: &mut SeededRng,
) -> Vec<Pick> {
    let mut basket = Basket::new(candidates.len());

    loop {
        let affordable = basket.affordable(candidates);
        let mut best: Option<(usize, f64)> = None;

        for (i, quote) in affordable {
            let per_point =
                weights[i] * candidate_value(&candidates[i], tuning) / quote.cost.max(1) as f64;
            let score = per_point * (1.0 + tuning.efficient_jitter * rng.next_float());
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((i, score));
            }
        }

        let Some((index, score)) = best else {
            break;
        };
        if weights[index] <= 0.0 {
            break;
        }
        basket.buy(candidates, index, format!("best value at {:.2} per point", score));
    }

    basket.picks
}

/// Randomized fills aiming for an exact budget match; best attempt wins
pub fn select_exact(
    candidates: &[Candidate<'_>],
    weights: &[f64],
    tuning: &AllocatorTuning,
    rng: &mut SeededRng,
) -> (Vec<Pick>, u32) {
    let attempts = tuning.exact_attempts.max(1);
    let mut best: Option<Basket> = None;
    let mut used = 0;

    for attempt in 1..=attempts {
        used = attempt;
        let mut basket = Basket::new(candidates.len());

        loop {
            let affordable = basket.affordable(candidates);
            let pool: Vec<f64> = affordable.iter().map(|(i, _)| weights[*i]).collect();
            let Some(slot) = weighted_index(&pool, rng) else {
                break;
            };
            let (index, _) = affordable[slot];
            let rationale = format!(
                "fills toward exactly {} points (attempt {} of {})",
                BUDGET, attempt, attempts
            );
            basket.buy(candidates, index, rationale);
        }

        let exact = basket.spent == BUDGET;
        if best.as_ref().map_or(true, |b| basket.spent > b.spent) {
            best = Some(basket);
        }
        if exact {
            break;
        }
    }

    tracing::trace!(attempts = used, "exact allocation finished");
    (best.map(|b| b.picks).unwrap_or_default(), used)
}

/// Flavor-weighted sampling that may deliberately leave points unspent
pub fn select_loose(
    candidates: &[Candidate<'_>],
    weights: &[f64],
    tuning: &AllocatorTuning,
    rng: &mut SeededRng,
) -> Vec<Pick> {
    let mut basket = Basket::new(candidates.len());

    loop {
        if basket.spent >= tuning.loose_min_spend && rng.next_float() < tuning.loose_stop_chance {
            break;
        }

        let affordable = basket.affordable(candidates);
        let pool: Vec<f64> = affordable.iter().map(|(i, _)| weights[*i]).collect();
        let Some(slot) = weighted_index(&pool, rng) else {
            break;
        };
        let (index, _) = affordable[slot];
        let share = weights[index] / pool.iter().filter(|w| **w > 0.0).sum::<f64>();
        basket.buy(
            candidates,
            index,
            format!("flavor pick with {:.0}% draw odds", share * 100.0),
        );
    }

    basket.picks
}
