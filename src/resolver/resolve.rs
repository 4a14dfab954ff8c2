//! Turns a match configuration into a fully concrete one

use crate::catalog::Catalog;
use crate::error::{ForgeError, Result};
use crate::random::SeededRng;
use crate::settings::{
    Archetype, EpochChoice, MapType, MatchConfig, ResolvedMatchConfig, ResolvedPlayer, Setting,
};

/// Resolve every randomized field of `config` from its seed.
///
/// Draw order: end epoch, then map type, preset, point usage, map size,
/// resources and game speed, then random archetypes in roster order. Fixed
/// fields consume no draw, so the result depends on the seed alone.
pub fn resolve_match_config(config: &MatchConfig, catalog: &Catalog) -> Result<ResolvedMatchConfig> {
    validate_config(config, catalog)?;

    let mut rng = SeededRng::from_seed_str(&config.seed);

    let end_epoch = match config.end_epoch {
        EpochChoice::Fixed(epoch) => epoch,
        EpochChoice::RandomRange { min, max } => rng.range_inclusive(min, max),
    };

    let map_type = draw_setting(&config.map_type, "map_type", &mut rng)?;
    let preset = draw_setting(&config.preset, "preset", &mut rng)?;
    let point_usage = draw_setting(&config.point_usage, "point_usage", &mut rng)?;
    let map_size = draw_setting(&config.map_size, "map_size", &mut rng)?;
    let resources = draw_setting(&config.resources, "resources", &mut rng)?;
    let game_speed = draw_setting(&config.game_speed, "game_speed", &mut rng)?;

    let players = config
        .players
        .iter()
        .map(|slot| ResolvedPlayer {
            name: slot.name.clone(),
            archetype: slot.archetype.unwrap_or_else(|| draw_archetype(&mut rng)),
        })
        .collect();

    let resolved = ResolvedMatchConfig {
        seed: config.seed.clone(),
        players,
        start_epoch: config.start_epoch,
        end_epoch,
        map_type,
        preset,
        point_usage,
        map_size,
        resources,
        game_speed,
    };

    verify_resolved(&resolved, config, catalog)?;

    tracing::debug!(
        seed = %resolved.seed,
        end_epoch = resolved.end_epoch,
        map = %resolved.map_type,
        preset = %resolved.preset,
        point_usage = %resolved.point_usage,
        players = resolved.players.len(),
        "resolved match config"
    );

    Ok(resolved)
}

fn draw_setting<T: Copy>(setting: &Setting<T>, field: &'static str, rng: &mut SeededRng) -> Result<T> {
    match setting {
        Setting::Fixed(value) => Ok(*value),
        Setting::RandomFromPool(pool) => rng.choice(pool).copied().ok_or(ForgeError::EmptyPool(field)),
    }
}

fn draw_archetype(rng: &mut SeededRng) -> Archetype {
    let index = rng.next_int(Archetype::ALL.len());
    Archetype::ALL[index]
}

/// Reject configurations that cannot resolve to a playable match
pub fn validate_config(config: &MatchConfig, catalog: &Catalog) -> Result<()> {
    if config.players.is_empty() {
        return Err(ForgeError::EmptyRoster);
    }

    let (first, last) = (catalog.min_epoch(), catalog.max_epoch());
    let in_range = |epoch: u8| epoch >= first && epoch <= last;

    if !in_range(config.start_epoch) {
        return Err(ForgeError::InvalidEpochWindow(format!(
            "start epoch {} outside {}..={}",
            config.start_epoch, first, last
        )));
    }

    match config.end_epoch {
        EpochChoice::Fixed(end) => {
            if !in_range(end) {
                return Err(ForgeError::InvalidEpochWindow(format!(
                    "end epoch {} outside {}..={}",
                    end, first, last
                )));
            }
            if config.start_epoch > end {
                return Err(ForgeError::InvalidEpochWindow(format!(
                    "start epoch {} is after end epoch {}",
                    config.start_epoch, end
                )));
            }
        }
        EpochChoice::RandomRange { min, max } => {
            if !in_range(min) || !in_range(max) {
                return Err(ForgeError::InvalidEpochWindow(format!(
                    "end epoch range {}..={} outside {}..={}",
                    min, max, first, last
                )));
            }
            if min > max {
                return Err(ForgeError::InvalidEpochWindow(format!(
                    "end epoch range is inverted ({} > {})",
                    min, max
                )));
            }
            if config.start_epoch > min {
                return Err(ForgeError::InvalidEpochWindow(format!(
                    "start epoch {} is after the earliest possible end epoch {}",
                    config.start_epoch, min
                )));
            }
        }
    }

    check_pool(&config.map_type, "map_type")?;
    check_pool(&config.preset, "preset")?;
    check_pool(&config.point_usage, "point_usage")?;
    check_pool(&config.map_size, "map_size")?;
    check_pool(&config.resources, "resources")?;
    check_pool(&config.game_speed, "game_speed")?;

    // Any map that could be drawn must be playable at the earliest possible end
    let earliest_end = config.end_epoch.lowest();
    for &map in config.map_type.candidates() {
        check_map_available(map, earliest_end, catalog)?;
    }

    Ok(())
}

fn check_pool<T>(setting: &Setting<T>, field: &'static str) -> Result<()> {
    if setting.candidates().is_empty() {
        return Err(ForgeError::EmptyPool(field));
    }
    Ok(())
}

fn check_map_available(map: MapType, end_epoch: u8, catalog: &Catalog) -> Result<()> {
    let info = catalog
        .map_info(map)
        .ok_or_else(|| ForgeError::InvalidCatalog(format!("missing map: {}", map)))?;
    if !info.available_at(end_epoch) {
        return Err(ForgeError::MapUnavailable {
            map: map.to_string(),
            required: info.min_epoch.unwrap_or(end_epoch),
            end: end_epoch,
        });
    }
    Ok(())
}

impl ResolvedMatchConfig {
    /// Check a resolved config against the catalog alone.
    ///
    /// Used when a resolved config arrives without its source, e.g. from a
    /// stored session.
    pub fn verify(&self, catalog: &Catalog) -> Result<()> {
        let mut fields = Vec::new();

        if self.start_epoch < catalog.min_epoch() || self.start_epoch > self.end_epoch {
            fields.push("start_epoch".to_string());
        }
        if self.end_epoch > catalog.max_epoch() {
            fields.push("end_epoch".to_string());
        }
        let map_ok = catalog
            .map_info(self.map_type)
            .map_or(false, |m| m.available_at(self.end_epoch));
        if !map_ok {
            fields.push("map_type".to_string());
        }
        if self.players.is_empty() {
            fields.push("players".to_string());
        }
        for (i, player) in self.players.iter().enumerate() {
            if player.name.trim().is_empty() {
                fields.push(format!("players[{}].name", i));
            }
        }

        if fields.is_empty() {
            Ok(())
        } else {
            tracing::warn!(fields = ?fields, "resolved config failed catalog check");
            Err(ForgeError::IntegrityViolation(fields))
        }
    }
}

/// Post-resolution integrity scan.
///
/// The resolved type cannot hold a "Random" placeholder; this checks the
/// remaining ways a resolution could be inconsistent with its source config
/// and reports every offending field.
pub fn verify_resolved(
    resolved: &ResolvedMatchConfig,
    config: &MatchConfig,
    catalog: &Catalog,
) -> Result<()> {
    let mut fields = Vec::new();

    if resolved.seed != config.seed {
        fields.push("seed".to_string());
    }
    if resolved.start_epoch != config.start_epoch {
        fields.push("start_epoch".to_string());
    }
    let end_ok = resolved.end_epoch >= config.end_epoch.lowest()
        && resolved.end_epoch <= config.end_epoch.highest()
        && resolved.end_epoch >= resolved.start_epoch;
    if !end_ok {
        fields.push("end_epoch".to_string());
    }

    let map_ok = config.map_type.candidates().contains(&resolved.map_type)
        && catalog
            .map_info(resolved.map_type)
            .map_or(false, |m| m.available_at(resolved.end_epoch));
    if !map_ok {
        fields.push("map_type".to_string());
    }
    if !config.preset.candidates().contains(&resolved.preset) {
        fields.push("preset".to_string());
    }
    if !config.point_usage.candidates().contains(&resolved.point_usage) {
        fields.push("point_usage".to_string());
    }
    if !config.map_size.candidates().contains(&resolved.map_size) {
        fields.push("map_size".to_string());
    }
    if !config.resources.candidates().contains(&resolved.resources) {
        fields.push("resources".to_string());
    }
    if !config.game_speed.candidates().contains(&resolved.game_speed) {
        fields.push("game_speed".to_string());
    }

    if resolved.players.len() != config.players.len() {
        fields.push("players".to_string());
    } else {
        for (i, (player, slot)) in resolved.players.iter().zip(&config.players).enumerate() {
            if player.name != slot.name {
                fields.push(format!("players[{}].name", i));
            }
            if slot.archetype.map_or(false, |a| a != player.archetype) {
                fields.push(format!("players[{}].archetype", i));
            }
        }
    }

    if fields.is_empty() {
        Ok(())
    } else {
        tracing::warn!(fields = ?fields, "resolved config failed integrity check");
        Err(ForgeError::IntegrityViolation(fields))
    }
}
