//! Benchmark for forging performance
//!
//! Target: an 8-player match should forge in well under 5ms

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use epoch_forge_core::allocator::allocate_loadout;
use epoch_forge_core::catalog::Catalog;
use epoch_forge_core::forge::{ForgeEngine, MatchSession};
use epoch_forge_core::settings::{EpochChoice, MapType, MatchConfig, PointUsage, Setting, Tuning};

/// A realistic lobby: full roster, random map and usage pools, random end epoch
fn create_test_config() -> MatchConfig {
    let mut config = MatchConfig::new("EF-1234", 8);
    config.end_epoch = EpochChoice::RandomRange { min: 8, max: 15 };
    config.map_type = Setting::random(vec![
        MapType::Continental,
        MapType::Mediterranean,
        MapType::SmallIslands,
        MapType::LargeIslands,
    ]);
    config
}

fn benchmark_forge_match(c: &mut Criterion) {
    let engine = ForgeEngine::default();
    let config = create_test_config();

    c.bench_function("forge_match_8_players", |b| {
        b.iter(|| black_box(engine.forge_match(black_box(&config))))
    });

    c.bench_function("match_session_with_export", |b| {
        b.iter(|| {
            let session = MatchSession::forge(engine.clone(), black_box(config.clone())).unwrap();
            black_box(session.export_json())
        })
    });
}

fn benchmark_allocation_modes(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let tuning = Tuning::default();
    let engine = ForgeEngine::default();

    for usage in PointUsage::ALL {
        let mut config = MatchConfig::new("EF-1234", 1);
        config.point_usage = Setting::Fixed(usage);
        config.map_type = Setting::Fixed(MapType::Mediterranean);
        let resolved = engine.resolve(&config).unwrap();
        let archetype = resolved.players[0].archetype;

        c.bench_function(&format!("allocate_{}", usage.as_str().to_lowercase()), |b| {
            b.iter(|| {
                black_box(allocate_loadout(
                    black_box(&resolved),
                    &catalog,
                    archetype,
                    "EF-1234-Taco-0",
                    &tuning.allocator,
                ))
            })
        });
    }
}

fn benchmark_resolution(c: &mut Criterion) {
    let engine = ForgeEngine::default();
    let config = create_test_config();

    c.bench_function("resolve_match_config", |b| {
        b.iter(|| black_box(engine.resolve(black_box(&config))))
    });
}

criterion_group!(benches, benchmark_forge_match, benchmark_allocation_modes, benchmark_resolution);
criterion_main!(benches);
