//! Eligibility filtering of catalog entries for one match

use crate::catalog::{Boost, Catalog, Category, CategoryHeading, CivPower, MapInfo, PhaseTags};

/// Inclusive epoch window of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochWindow {
    pub start: u8,
    pub end: u8,
}

impl EpochWindow {
    pub fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Whether `[min, max]` shares at least one epoch with this window
    #[inline]
    pub fn overlaps(&self, min: u8, max: u8) -> bool {
        min <= self.end && max >= self.start
    }
}

/// A catalog entry that may be purchased in this match
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Candidate<'a> {
    Boost {
        boost: &'a Boost,
        heading: &'a CategoryHeading,
    },
    Power(&'a CivPower),
}

impl<'a> Candidate<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            Candidate::Boost { boost, .. } => &boost.name,
            Candidate::Power(power) => &power.name,
        }
    }

    pub fn base_cost(&self) -> u32 {
        match self {
            Candidate::Boost { boost, .. } => boost.base_cost,
            Candidate::Power(power) => power.cost,
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Candidate::Boost { boost, .. } => Some(boost.category),
            Candidate::Power(_) => None,
        }
    }

    pub fn tags(&self) -> &'a PhaseTags {
        match *self {
            Candidate::Boost { boost, .. } => &boost.tags,
            Candidate::Power(power) => &power.tags,
        }
    }

    pub fn is_power(&self) -> bool {
        matches!(self, Candidate::Power(_))
    }
}

/// Whether a boost may be bought in this window on this map
pub fn is_boost_eligible(
    heading: &CategoryHeading,
    window: EpochWindow,
    max_epoch: u8,
    map: &MapInfo,
) -> bool {
    if !window.overlaps(heading.min_epoch, max_epoch) {
        return false;
    }
    if heading.category.is_naval_only() && !map.naval_support {
        return false;
    }
    true
}

#[inline]
pub fn is_power_eligible(power: &CivPower, window: EpochWindow) -> bool {
    window.overlaps(power.min_epoch, power.max_epoch)
}

/// Every purchasable entry, boosts first, each table in catalog order
pub fn eligible_candidates<'a>(
    catalog: &'a Catalog,
    window: EpochWindow,
    map: &MapInfo,
) -> Vec<Candidate<'a>> {
    let max_epoch = catalog.max_epoch();
    let mut candidates = Vec::with_capacity(catalog.boosts().len() + catalog.powers().len());

    for boost in catalog.boosts() {
        let Some(heading) = catalog.heading(boost.category) else {
            continue;
        };
        if is_boost_eligible(heading, window, max_epoch, map) {
            candidates.push(Candidate::Boost { boost, heading });
        }
    }

    for power in catalog.powers() {
        if is_power_eligible(power, window) {
            candidates.push(Candidate::Power(power));
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MapType;

    #[test]
    fn test_window_overlap() {
        let window = EpochWindow::new(3, 6);
        assert!(window.overlaps(1, 3));
        assert!(window.overlaps(6, 15));
        assert!(window.overlaps(4, 5));
        assert!(!window.overlaps(7, 15));
        assert!(!window.overlaps(1, 2));
    }

    #[test]
    fn test_stone_age_only_pool() {
        let catalog = Catalog::builtin();
        let map = catalog.map_info(MapType::Mediterranean).unwrap();
        let candidates = eligible_candidates(&catalog, EpochWindow::new(1, 1), map);

        assert!(!candidates.is_empty());
        for candidate in &candidates {
            match candidate {
                Candidate::Boost { heading, .. } => assert_eq!(heading.min_epoch, 1),
                Candidate::Power(power) => assert_eq!(power.min_epoch, 1),
            }
        }
        assert!(candidates.iter().all(|c| c.category() != Some(Category::Ships)));
        assert!(candidates.iter().all(|c| c.name() != "Market"));
    }

    #[test]
    fn test_ships_need_naval_support() {
        let catalog = Catalog::builtin();
        let window = EpochWindow::new(1, 15);

        let land = catalog.map_info(MapType::Continental).unwrap();
        let land_pool = eligible_candidates(&catalog, window, land);
        assert!(land_pool.iter().all(|c| c.category() != Some(Category::Ships)));

        let islands = catalog.map_info(MapType::SmallIslands).unwrap();
        let water_pool = eligible_candidates(&catalog, window, islands);
        assert_eq!(
            water_pool
                .iter()
                .filter(|c| c.category() == Some(Category::Ships))
                .count(),
            5
        );
    }

    #[test]
    fn test_late_window_excludes_nothing_by_epoch() {
        let catalog = Catalog::builtin();
        let islands = catalog.map_info(MapType::SmallIslands).unwrap();
        let pool = eligible_candidates(&catalog, EpochWindow::new(13, 15), islands);
        assert_eq!(pool.len(), catalog.boosts().len() + catalog.powers().len());
    }
}
