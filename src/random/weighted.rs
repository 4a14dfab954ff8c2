//! Weighted random selection over a seeded stream

use super::SeededRng;

/// Pick an index from `weights` with probability proportional to its weight.
///
/// Non-positive weights never win. Returns `None` when nothing can be picked.
#[inline]
pub fn weighted_index(weights: &[f64], rng: &mut SeededRng) -> Option<usize> {
    let total_weight: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if total_weight <= 0.0 {
        return None;
    }

    let mut random_value = rng.next_float() * total_weight;
    let mut last_positive = None;

    for (i, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        last_positive = Some(i);
        random_value -= weight;
        if random_value < 0.0 {
            return Some(i);
        }
    }

    // Float rounding can leave a sliver at the end
    last_positive
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_single() {
        let mut rng = SeededRng::from_seed_str("single");
        assert_eq!(weighted_index(&[1.0], &mut rng), Some(0));
    }

    #[test]
    fn test_weighted_empty_or_zero() {
        let mut rng = SeededRng::from_seed_str("empty");
        assert_eq!(weighted_index(&[], &mut rng), None);
        assert_eq!(weighted_index(&[0.0, -1.0], &mut rng), None);
    }

    #[test]
    fn test_zero_weight_never_selected() {
        let mut rng = SeededRng::from_seed_str("zero");
        for _ in 0..500 {
            assert_eq!(weighted_index(&[0.0, 2.0, 0.0], &mut rng), Some(1));
        }
    }

    #[test]
    fn test_weighted_distribution() {
        let mut rng = SeededRng::from_seed_str("distribution");
        let mut counts = [0, 0];

        for _ in 0..2000 {
            if let Some(i) = weighted_index(&[1.0, 3.0], &mut rng) {
                counts[i] += 1;
            }
        }

        // Second entry should win roughly three times as often
        let ratio = counts[1] as f64 / counts[0] as f64;
        assert!(ratio > 2.2 && ratio < 4.0, "ratio was {}", ratio);
    }
}
