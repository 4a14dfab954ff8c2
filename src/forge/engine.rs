//! Match orchestration: resolve once, then generate every player

use super::PlayerCiv;
use crate::allocator::allocate_loadout;
use crate::catalog::{active_catalog, Catalog};
use crate::error::{ForgeError, Result};
use crate::random::hash_seed;
use crate::resolver::resolve_match_config;
use crate::scoring::score_loadout;
use crate::settings::{MatchConfig, ResolvedMatchConfig, Tuning};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of forging a whole match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForgedMatch {
    pub resolved: ResolvedMatchConfig,
    /// One civ per player, in roster order
    pub civs: Vec<PlayerCiv>,
}

/// Loadout generation engine
#[derive(Debug, Clone)]
pub struct ForgeEngine {
    catalog: Arc<Catalog>,
    tuning: Tuning,
}

impl Default for ForgeEngine {
    fn default() -> Self {
        Self::new(Catalog::builtin(), Tuning::default())
    }
}

impl ForgeEngine {
    pub fn new(catalog: Arc<Catalog>, tuning: Tuning) -> Self {
        Self { catalog, tuning }
    }

    /// Engine over whatever catalog is installed process-wide
    pub fn from_active_catalog(tuning: Tuning) -> Self {
        Self::new(active_catalog(), tuning)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Resolve and integrity-check a match configuration
    pub fn resolve(&self, config: &MatchConfig) -> Result<ResolvedMatchConfig> {
        resolve_match_config(config, &self.catalog)
    }

    /// Resolve `config` and generate a civ for every player
    pub fn forge_match(&self, config: &MatchConfig) -> Result<ForgedMatch> {
        let resolved = self.resolve(config)?;

        let civs = resolved
            .players
            .iter()
            .enumerate()
            .map(|(index, player)| self.generate_player(&resolved, &player.name, index))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(seed = %resolved.seed, civs = civs.len(), "forged match");
        Ok(ForgedMatch { resolved, civs })
    }

    /// Generate the first loadout of the player at `index`
    pub fn generate_player(
        &self,
        resolved: &ResolvedMatchConfig,
        player_name: &str,
        index: usize,
    ) -> Result<PlayerCiv> {
        let seed = resolved.player_seed(player_name, index);
        self.build_civ(resolved, player_name, index, seed)
    }

    /// Generate the replacement loadout for a reroll
    pub fn reroll_player(
        &self,
        resolved: &ResolvedMatchConfig,
        player_name: &str,
        index: usize,
    ) -> Result<PlayerCiv> {
        let seed = resolved.reroll_seed(player_name, index);
        let mut civ = self.build_civ(resolved, player_name, index, seed)?;
        civ.reroll_used = true;
        civ.reasoning.push_str(" (Rerolled)");
        Ok(civ)
    }

    fn build_civ(
        &self,
        resolved: &ResolvedMatchConfig,
        player_name: &str,
        index: usize,
        seed: String,
    ) -> Result<PlayerCiv> {
        resolved.verify(&self.catalog)?;
        let archetype = resolved
            .player(index)
            .ok_or(ForgeError::PlayerNotFound(index))?
            .archetype;

        let allocation =
            allocate_loadout(resolved, &self.catalog, archetype, &seed, &self.tuning.allocator)?;
        let card = score_loadout(&allocation, resolved, archetype, &self.catalog, &self.tuning)?;

        tracing::debug!(
            player = player_name,
            index,
            %archetype,
            points = allocation.points_spent,
            score = card.power_score,
            valid = card.is_valid,
            "generated civ"
        );

        Ok(PlayerCiv {
            id: format!("civ-{}-{:016x}", index, hash_seed(&seed)),
            player_name: player_name.to_string(),
            archetype,
            seed,
            points_spent: allocation.points_spent,
            items: allocation.items,
            ratings: card.ratings,
            summary: card.summary,
            primary_category: card.primary_category,
            reasoning: card.reasoning,
            power_score: card.power_score,
            legendary: card.legendary,
            difficulty: card.difficulty,
            synergies: card.synergies,
            warnings: card.warnings,
            reroll_used: false,
            is_valid: card.is_valid,
        })
    }
}
