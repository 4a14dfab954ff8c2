//! MatchSession - Stateful roster of one forged match
//!
//! Owns the resolved configuration and the current civ of every player, and
//! applies the reroll rules. With the `python` feature it doubles as the
//! handle returned to Python, which reads civs lazily instead of receiving
//! the whole match serialized upfront.

use super::{ForgeEngine, PlayerCiv};
use crate::error::{ForgeError, Result};
use crate::settings::{MatchConfig, ResolvedMatchConfig};
use serde::Serialize;

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::{PyDict, PyList};

/// Result of a reroll request that was not rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RerollOutcome {
    /// The player received a fresh loadout
    Rerolled,
    /// The player already spent their reroll; nothing changed
    AlreadyUsed,
}

/// Exported match document
#[derive(Serialize)]
struct MatchExport<'a> {
    config: &'a ResolvedMatchConfig,
    civs: &'a [PlayerCiv],
}

// ============================================================================
// MatchSession
// ============================================================================

/// One forged match and its current roster of civs
#[cfg_attr(feature = "python", pyclass)]
#[derive(Debug, Clone)]
pub struct MatchSession {
    engine: ForgeEngine,
    config: MatchConfig,
    resolved: ResolvedMatchConfig,
    civs: Vec<PlayerCiv>,
}

impl MatchSession {
    /// Forge `config` and keep the result for rerolls and export
    pub fn forge(engine: ForgeEngine, config: MatchConfig) -> Result<Self> {
        let forged = engine.forge_match(&config)?;
        Ok(Self {
            engine,
            config,
            resolved: forged.resolved,
            civs: forged.civs,
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn resolved(&self) -> &ResolvedMatchConfig {
        &self.resolved
    }

    pub fn civs(&self) -> &[PlayerCiv] {
        &self.civs
    }

    pub fn civ(&self, index: usize) -> Option<&PlayerCiv> {
        self.civs.get(index)
    }

    /// Replace the civ at `index` with its one-time reroll.
    ///
    /// Tournament matches reject rerolls outright. A player whose reroll is
    /// already spent keeps their civ unchanged. Other players are never
    /// touched.
    pub fn reroll(&mut self, index: usize) -> Result<RerollOutcome> {
        if !self.resolved.preset.allows_reroll() {
            return Err(ForgeError::RerollLocked);
        }
        let current = self.civs.get(index).ok_or(ForgeError::PlayerNotFound(index))?;
        if current.reroll_used {
            tracing::debug!(index, "reroll already used");
            return Ok(RerollOutcome::AlreadyUsed);
        }

        let name = current.player_name.clone();
        let civ = self.engine.reroll_player(&self.resolved, &name, index)?;
        self.civs[index] = civ;

        tracing::debug!(index, player = %name, "rerolled civ");
        Ok(RerollOutcome::Rerolled)
    }

    /// Pretty JSON document holding the resolved config and every civ
    pub fn export_json(&self) -> Result<String> {
        let export = MatchExport {
            config: &self.resolved,
            civs: &self.civs,
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }
}

// ============================================================================
// PyMethods Implementation
// ============================================================================

#[cfg(feature = "python")]
impl MatchSession {
    fn civ_to_dict<'py>(&self, py: Python<'py>, civ: &PlayerCiv) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("id", &civ.id)?;
        dict.set_item("player_name", &civ.player_name)?;
        dict.set_item("archetype", civ.archetype.as_str())?;
        dict.set_item("seed", &civ.seed)?;
        dict.set_item("points_spent", civ.points_spent)?;
        dict.set_item("summary", &civ.summary)?;
        dict.set_item("primary_category", civ.primary_category.as_deref())?;
        dict.set_item("reasoning", &civ.reasoning)?;
        dict.set_item("power_score", civ.power_score)?;
        dict.set_item("legendary", civ.legendary)?;
        dict.set_item("difficulty", civ.difficulty.as_str())?;
        dict.set_item("warnings", &civ.warnings)?;
        dict.set_item("reroll_used", civ.reroll_used)?;
        dict.set_item("is_valid", civ.is_valid)?;

        let ratings = PyDict::new(py);
        ratings.set_item("early", civ.ratings.early)?;
        ratings.set_item("mid", civ.ratings.mid)?;
        ratings.set_item("late", civ.ratings.late)?;
        dict.set_item("ratings", ratings)?;

        let items = PyList::empty(py);
        for item in &civ.items {
            let entry = PyDict::new(py);
            entry.set_item("name", &item.name)?;
            entry.set_item("is_power", item.is_power())?;
            entry.set_item("category", item.category.map(|c| c.as_str()))?;
            entry.set_item("cost", item.cost)?;
            entry.set_item("original_cost", item.original_cost)?;
            entry.set_item("inflation_applied", item.inflation_applied)?;
            entry.set_item("description", item.description.as_deref())?;
            entry.set_item("trace", &item.trace)?;
            items.append(entry)?;
        }
        dict.set_item("items", items)?;

        let synergies: Vec<&str> = civ.synergies.iter().map(|s| s.name.as_str()).collect();
        dict.set_item("synergies", synergies)?;

        Ok(dict)
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl MatchSession {
    // ------------------------------------------------------------------------
    // Getter Properties
    // ------------------------------------------------------------------------

    #[getter]
    fn seed(&self) -> &str {
        &self.resolved.seed
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.civs.len()
    }

    #[getter]
    fn start_epoch(&self) -> u8 {
        self.resolved.start_epoch
    }

    #[getter]
    fn end_epoch(&self) -> u8 {
        self.resolved.end_epoch
    }

    #[getter]
    fn map_type(&self) -> &'static str {
        self.resolved.map_type.as_str()
    }

    #[getter]
    fn preset(&self) -> &'static str {
        self.resolved.preset.as_str()
    }

    #[getter]
    fn point_usage(&self) -> &'static str {
        self.resolved.point_usage.as_str()
    }

    // ------------------------------------------------------------------------
    // Lazy Data Access Methods
    // ------------------------------------------------------------------------

    /// Get one civ as a dict, or None if out of bounds
    fn get_civ(&self, py: Python<'_>, index: usize) -> PyResult<Py<PyAny>> {
        match self.civs.get(index) {
            Some(civ) => Ok(self.civ_to_dict(py, civ)?.into_any().unbind()),
            None => Ok(py.None()),
        }
    }

    /// Get every civ in roster order
    fn get_civs(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for civ in &self.civs {
            list.append(self.civ_to_dict(py, civ)?)?;
        }
        Ok(list.into_any().unbind())
    }

    /// Plain-text tactical card of one civ
    fn get_tactical_report(&self, index: usize) -> PyResult<String> {
        let civ = self.civs.get(index).ok_or(ForgeError::PlayerNotFound(index))?;
        Ok(civ.tactical_report())
    }

    /// Reroll one player; returns False when their reroll was already used
    #[pyo3(name = "reroll")]
    fn py_reroll(&mut self, index: usize) -> PyResult<bool> {
        Ok(self.reroll(index)? == RerollOutcome::Rerolled)
    }

    #[pyo3(name = "export_json")]
    fn py_export_json(&self) -> PyResult<String> {
        Ok(self.export_json()?)
    }
}
