//! Property tests for configuration resolution
//!
//! Resolution is reproducible, stays inside every allowed pool, and never
//! lets a random archetype slot through unresolved.

use proptest::prelude::*;

use crate::catalog::Catalog;
use crate::resolver::{resolve_match_config, verify_resolved};
use crate::settings::{
    Archetype, EpochChoice, GameSpeed, MapSize, MapType, MatchConfig, PointUsage, Preset,
    Resources, Setting,
};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators
// ═══════════════════════════════════════════════════════════════════════════

fn pool_strategy<T: Copy + std::fmt::Debug + 'static>(
    domain: &'static [T],
) -> impl Strategy<Value = Setting<T>> {
    prop_oneof![
        (0..domain.len()).prop_map(move |i| Setting::Fixed(domain[i])),
        prop::sample::subsequence(domain.to_vec(), 1..=domain.len())
            .prop_map(Setting::RandomFromPool),
    ]
}

/// Terrestrial maps are playable in every epoch window
const TERRESTRIAL_MAPS: [MapType; 7] = [
    MapType::Continental,
    MapType::Mediterranean,
    MapType::Highlands,
    MapType::Plains,
    MapType::LargeIslands,
    MapType::SmallIslands,
    MapType::TournamentIslands,
];

fn config_strategy() -> impl Strategy<Value = MatchConfig> {
    (
        "[A-Z]{2}-[0-9]{1,5}",
        1..=8usize,
        1..=15u8,
        any::<bool>(),
        0..=14u8,
        pool_strategy(&TERRESTRIAL_MAPS),
        pool_strategy(&Preset::ALL),
        pool_strategy(&PointUsage::ALL),
        (
            pool_strategy(&MapSize::ALL),
            pool_strategy(&Resources::ALL),
            pool_strategy(&GameSpeed::ALL),
        ),
        prop::collection::vec(prop::option::of(0..5usize), 8),
    )
        .prop_map(
            |(seed, players, start, random_end, extra, map_type, preset, point_usage, rest, archs)| {
                let mut config = MatchConfig::new(seed, players);
                config.start_epoch = start;
                let max_end = (start + extra).min(15);
                config.end_epoch = if random_end {
                    EpochChoice::RandomRange { min: start, max: max_end }
                } else {
                    EpochChoice::Fixed(max_end)
                };
                config.map_type = map_type;
                config.preset = preset;
                config.point_usage = point_usage;
                config.map_size = rest.0;
                config.resources = rest.1;
                config.game_speed = rest.2;
                for (slot, arch) in config.players.iter_mut().zip(archs) {
                    slot.archetype = arch.map(|i| Archetype::ALL[i]);
                }
                config
            },
        )
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Resolving the same config twice yields identical results
    #[test]
    fn prop_resolution_deterministic(config in config_strategy()) {
        let catalog = Catalog::builtin();
        let a = resolve_match_config(&config, &catalog).unwrap();
        let b = resolve_match_config(&config, &catalog).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Every resolved value comes from its allowed pool and passes verification
    #[test]
    fn prop_resolved_values_in_pools(config in config_strategy()) {
        let catalog = Catalog::builtin();
        let resolved = resolve_match_config(&config, &catalog).unwrap();

        prop_assert!(config.map_type.candidates().contains(&resolved.map_type));
        prop_assert!(config.preset.candidates().contains(&resolved.preset));
        prop_assert!(config.point_usage.candidates().contains(&resolved.point_usage));
        prop_assert!(config.map_size.candidates().contains(&resolved.map_size));
        prop_assert!(config.resources.candidates().contains(&resolved.resources));
        prop_assert!(config.game_speed.candidates().contains(&resolved.game_speed));
        prop_assert!(resolved.start_epoch <= resolved.end_epoch);
        prop_assert!(verify_resolved(&resolved, &config, &catalog).is_ok());
    }

    /// Fixed archetypes survive; random ones become one of the five concrete archetypes
    #[test]
    fn prop_archetypes_resolved(config in config_strategy()) {
        let catalog = Catalog::builtin();
        let resolved = resolve_match_config(&config, &catalog).unwrap();

        prop_assert_eq!(resolved.players.len(), config.players.len());
        for (slot, player) in config.players.iter().zip(&resolved.players) {
            prop_assert_eq!(&slot.name, &player.name);
            if let Some(fixed) = slot.archetype {
                prop_assert_eq!(fixed, player.archetype);
            }
            prop_assert!(Archetype::ALL.contains(&player.archetype));
        }
    }
}
