//! Epoch Forge Core - Deterministic civilization loadout generator
//!
//! This crate resolves partially randomized match setups from a seed and
//! spends each player's point budget on boosts and civilization powers.
//! Python bindings via PyO3 are available behind the `python` feature.

pub mod allocator;
pub mod catalog;
pub mod error;
pub mod forge;
pub mod random;
pub mod resolver;
pub mod scoring;
pub mod settings;

pub use error::{ForgeError, Result};
pub use forge::{ForgeEngine, ForgedMatch, MatchSession, PlayerCiv, RerollOutcome};
pub use settings::{MatchConfig, ResolvedMatchConfig, Tuning};

#[cfg(feature = "python")]
mod python {
    use crate::catalog::{has_custom_catalog, install_catalog, reset_catalog, Catalog};
    use crate::forge::{ForgeEngine, MatchSession};
    use crate::settings::{MatchConfig, Tuning};
    use once_cell::sync::OnceCell;
    use parking_lot::RwLock;
    use pyo3::prelude::*;
    use std::sync::Arc;

    // ============================================================================
    // Cached Engine
    // ============================================================================

    /// Global cached engine
    static CACHED_ENGINE: OnceCell<Arc<RwLock<ForgeEngine>>> = OnceCell::new();

    fn cached_engine() -> PyResult<Arc<RwLock<ForgeEngine>>> {
        CACHED_ENGINE.get().cloned().ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
                "Catalog not initialized. Call init_catalog() first.",
            )
        })
    }

    // ============================================================================
    // Python Functions
    // ============================================================================

    /// Initialize the game catalog and calibration (call once at startup)
    ///
    /// # Arguments
    /// * `catalog_json` - Optional catalog tables as JSON (default: built-in tables)
    /// * `tuning_json` - Optional calibration as JSON; missing fields keep defaults
    #[pyfunction]
    #[pyo3(signature = (catalog_json=None, tuning_json=None))]
    fn init_catalog(catalog_json: Option<&str>, tuning_json: Option<&str>) -> PyResult<()> {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(json)?,
            None => Tuning::default(),
        };

        match catalog_json {
            Some(json) => {
                install_catalog(Catalog::from_json(json)?);
            }
            None => reset_catalog(),
        }

        let engine = ForgeEngine::from_active_catalog(tuning);

        // If already initialized, swap the engine in place
        if let Some(existing) = CACHED_ENGINE.get() {
            *existing.write() = engine;
        } else {
            let _ = CACHED_ENGINE.set(Arc::new(RwLock::new(engine)));
        }
        Ok(())
    }

    /// Check if `init_catalog` has run
    #[pyfunction]
    fn is_catalog_initialized() -> bool {
        CACHED_ENGINE.get().is_some()
    }

    /// Check if the active catalog came from JSON rather than the built-in tables
    #[pyfunction]
    fn is_custom_catalog() -> bool {
        has_custom_catalog()
    }

    /// Forge a whole match from its JSON configuration
    ///
    /// # Returns
    /// A MatchSession holding every player's civ
    ///
    /// # Raises
    /// ValueError for invalid configurations, RuntimeError if `init_catalog`
    /// was not called first
    #[pyfunction]
    fn forge_match(config_json: &str) -> PyResult<MatchSession> {
        let config = MatchConfig::from_json(config_json)?;
        let engine = cached_engine()?.read().clone();
        Ok(MatchSession::forge(engine, config)?)
    }

    /// Forge a match asynchronously
    ///
    /// Generation runs on a Tokio blocking thread so Python's asyncio event
    /// loop stays responsive.
    ///
    /// # Example (Python)
    /// ```python
    /// session = await forge_match_async(config_json)
    /// print(session.player_count)
    /// ```
    #[pyfunction]
    fn forge_match_async<'py>(py: Python<'py>, config_json: String) -> PyResult<Bound<'py, PyAny>> {
        let engine = cached_engine()?.read().clone();

        pyo3_async_runtimes::tokio::future_into_py(py, async move {
            let session = tokio::task::spawn_blocking(move || {
                let config = MatchConfig::from_json(&config_json)?;
                Ok::<MatchSession, PyErr>(MatchSession::forge(engine, config)?)
            })
            .await
            .map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                    "Forge task panicked: {}",
                    e
                ))
            })??;

            Ok(session)
        })
    }

    // ============================================================================
    // Python Module Definition
    // ============================================================================

    #[pymodule]
    fn epoch_forge_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(init_catalog, m)?)?;
        m.add_function(wrap_pyfunction!(is_catalog_initialized, m)?)?;
        m.add_function(wrap_pyfunction!(is_custom_catalog, m)?)?;
        m.add_function(wrap_pyfunction!(forge_match, m)?)?;
        m.add_function(wrap_pyfunction!(forge_match_async, m)?)?;
        m.add_class::<MatchSession>()?;
        Ok(())
    }
}
