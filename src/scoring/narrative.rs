//! Summary, reasoning and warning text

use super::ratings::phase_spend;
use crate::allocator::{archetype_affinity, GeneratedItem};
use crate::catalog::{Catalog, MapCategory, MapInfo, Phase};
use crate::settings::{Archetype, ResolvedMatchConfig, ScoringTuning, BUDGET};
use ahash::AHashMap;

/// Display group shared by all civilization powers
pub const POWERS_GROUP: &str = "Civilization Powers";

/// Group with the highest spend. Heading order breaks ties; powers rank last.
pub fn primary_category(items: &[GeneratedItem], catalog: &Catalog) -> Option<String> {
    let powers_rank = catalog.headings().len();
    let mut spend: AHashMap<usize, (u32, String)> = AHashMap::new();

    for item in items {
        let (rank, label) = match item.category {
            Some(category) => (catalog.heading_rank(category), category.to_string()),
            None => (powers_rank, POWERS_GROUP.to_string()),
        };
        spend.entry(rank).or_insert((0, label)).0 += item.cost;
    }

    spend
        .into_iter()
        .max_by(|(rank_a, (a, _)), (rank_b, (b, _))| a.cmp(b).then(rank_b.cmp(rank_a)))
        .map(|(_, (_, label))| label)
}

pub fn compose_summary(archetype: Archetype, primary: Option<&str>, synergies: usize) -> String {
    let Some(primary) = primary else {
        return format!("{} doctrine with no eligible purchases", archetype);
    };
    match synergies {
        0 => format!("{} doctrine built around {}", archetype, primary),
        1 => format!("{} doctrine built around {} with 1 synergy", archetype, primary),
        n => format!("{} doctrine built around {} with {} synergies", archetype, primary, n),
    }
}

fn doctrine_line(resolved: &ResolvedMatchConfig, archetype: Archetype) -> String {
    let focus = archetype_affinity(archetype);
    let leaning = if focus.is_empty() {
        "no category preference".to_string()
    } else {
        let names: Vec<&str> = focus.iter().map(|c| c.as_str()).collect();
        format!("favoring {}", names.join(", "))
    };
    format!(
        "{} doctrine, {}. {} spending over epochs {}-{} on {} ({}).",
        archetype,
        leaning,
        resolved.point_usage,
        resolved.start_epoch,
        resolved.end_epoch,
        resolved.map_type,
        resolved.preset
    )
}

/// Doctrine line, then each purchase and its trace, then the residual
pub fn compose_reasoning(
    resolved: &ResolvedMatchConfig,
    archetype: Archetype,
    items: &[GeneratedItem],
    points_spent: u32,
) -> String {
    let mut parts = vec![doctrine_line(resolved, archetype)];
    for (i, item) in items.iter().enumerate() {
        parts.push(format!("{}. {} ({}): {}.", i + 1, item.name, item.cost, item.trace));
    }
    parts.push(format!(
        "Residual points: {}.",
        BUDGET.saturating_sub(points_spent)
    ));
    parts.join(" ")
}

/// Non-fatal advisories about the loadout in its match context
pub fn collect_warnings(
    resolved: &ResolvedMatchConfig,
    archetype: Archetype,
    items: &[GeneratedItem],
    catalog: &Catalog,
    map: &MapInfo,
    tuning: &ScoringTuning,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if archetype == Archetype::Naval && !map.naval_support {
        warnings.push(format!(
            "Naval doctrine on {}, which has no naval support",
            map.label
        ));
    }

    if archetype == Archetype::Aggressive && map.category == MapCategory::Water {
        warnings.push(format!(
            "Aggressive land doctrine on {}, an all-water map",
            map.label
        ));
    }

    if !map.naval_support {
        for item in items.iter().filter(|i| i.name.contains("Fishing")) {
            warnings.push(format!("{} has no use on {}", item.name, map.label));
        }
    }

    let late = phase_spend(items, catalog, Phase::Late);
    if late >= tuning.late_heavy_points && resolved.end_epoch <= tuning.short_window_end_epoch {
        warnings.push(format!(
            "{} points invested in late-game items, but the match ends at epoch {}",
            late, resolved.end_epoch
        ));
    }

    if items.is_empty() {
        warnings.push("No eligible items could be purchased for this match".to_string());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::ItemKind;
    use crate::catalog::Category;
    use crate::resolver::resolve_match_config;
    use crate::settings::{EpochChoice, MapType, MatchConfig, Setting};

    fn item(name: &str, category: Option<Category>, cost: u32) -> GeneratedItem {
        GeneratedItem {
            name: name.to_string(),
            kind: if category.is_some() { ItemKind::Boost } else { ItemKind::Power },
            category,
            cost,
            original_cost: cost,
            inflation_applied: 0,
            description: None,
            trace: "picked".to_string(),
        }
    }

    fn resolved(map: MapType, end: u8) -> ResolvedMatchConfig {
        let mut config = MatchConfig::new("NARRATIVE", 1);
        config.map_type = Setting::Fixed(map);
        config.end_epoch = EpochChoice::Fixed(end);
        resolve_match_config(&config, &Catalog::builtin()).unwrap()
    }

    #[test]
    fn test_primary_category_by_spend() {
        let catalog = Catalog::builtin();
        let items = vec![
            item("20% Farming", Some(Category::Economy), 9),
            item("Expansionism", None, 30),
            item("20% Attack (Buildings)", Some(Category::Buildings), 3),
        ];
        assert_eq!(primary_category(&items, &catalog).as_deref(), Some(POWERS_GROUP));
        assert_eq!(primary_category(&[], &catalog), None);
    }

    #[test]
    fn test_primary_category_tie_uses_heading_order() {
        let catalog = Catalog::builtin();
        let items = vec![
            item("20% Attack (Buildings)", Some(Category::Buildings), 9),
            item("20% Farming", Some(Category::Economy), 9),
            item("Slavery", None, 9),
        ];
        assert_eq!(
            primary_category(&items, &catalog).as_deref(),
            Some(Category::Economy.as_str())
        );
    }

    #[test]
    fn test_summary_wording() {
        assert_eq!(
            compose_summary(Archetype::Economic, Some("Civ – Economy"), 2),
            "Economic doctrine built around Civ – Economy with 2 synergies"
        );
        assert!(compose_summary(Archetype::Naval, None, 0).contains("no eligible purchases"));
    }

    #[test]
    fn test_reasoning_narrates_in_order() {
        let config = resolved(MapType::Continental, 15);
        let items = vec![
            item("20% Farming", Some(Category::Economy), 9),
            item("Slavery", None, 10),
        ];
        let reasoning = compose_reasoning(&config, Archetype::Economic, &items, 19);
        assert!(reasoning.starts_with("Economic doctrine"));
        let farming = reasoning.find("1. 20% Farming").unwrap();
        let slavery = reasoning.find("2. Slavery").unwrap();
        assert!(farming < slavery);
        assert!(reasoning.ends_with("Residual points: 81."));
    }

    #[test]
    fn test_map_warnings() {
        let catalog = Catalog::builtin();
        let tuning = ScoringTuning::default();

        let land = resolved(MapType::Continental, 15);
        let land_map = catalog.map_info(MapType::Continental).unwrap();
        let fishing = vec![item("20% Fishing", Some(Category::Economy), 9)];
        let warnings = collect_warnings(&land, Archetype::Naval, &fishing, &catalog, land_map, &tuning);
        assert_eq!(warnings.len(), 2);

        let water = resolved(MapType::SmallIslands, 15);
        let water_map = catalog.map_info(MapType::SmallIslands).unwrap();
        let warnings =
            collect_warnings(&water, Archetype::Aggressive, &fishing, &catalog, water_map, &tuning);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("all-water"));
    }

    #[test]
    fn test_late_heavy_short_window_warning() {
        let catalog = Catalog::builtin();
        let tuning = ScoringTuning::default();
        let short = resolved(MapType::Plains, 5);
        let map = catalog.map_info(MapType::Plains).unwrap();
        let items = vec![
            item("20% Area Effect (Siege)", Some(Category::Siege), 25),
            item("15% Population Cap", Some(Category::General), 20),
        ];
        let warnings = collect_warnings(&short, Archetype::Balanced, &items, &catalog, map, &tuning);
        assert!(warnings.iter().any(|w| w.contains("late-game")));
    }

    #[test]
    fn test_empty_loadout_warning() {
        let catalog = Catalog::builtin();
        let config = resolved(MapType::Plains, 15);
        let map = catalog.map_info(MapType::Plains).unwrap();
        let warnings = collect_warnings(
            &config,
            Archetype::Balanced,
            &[],
            &catalog,
            map,
            &ScoringTuning::default(),
        );
        assert_eq!(warnings.len(), 1);
    }
}
