//! Process-wide active catalog
//!
//! Embedders that ship their own game tables install them once at startup;
//! everything else falls back to the built-in catalog.

use super::Catalog;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

/// Installed catalog override
static ACTIVE_CATALOG: Lazy<RwLock<Option<Arc<Catalog>>>> = Lazy::new(|| RwLock::new(None));

/// Install a catalog for all subsequent engines built from the active catalog
pub fn install_catalog(catalog: Catalog) -> Arc<Catalog> {
    let catalog = Arc::new(catalog);
    *ACTIVE_CATALOG.write() = Some(catalog.clone());
    tracing::debug!(
        boosts = catalog.boosts().len(),
        powers = catalog.powers().len(),
        "installed custom catalog"
    );
    catalog
}

/// The installed catalog, or the built-in one
pub fn active_catalog() -> Arc<Catalog> {
    if let Some(catalog) = ACTIVE_CATALOG.read().as_ref() {
        return catalog.clone();
    }
    Catalog::builtin()
}

pub fn has_custom_catalog() -> bool {
    ACTIVE_CATALOG.read().is_some()
}

/// Drop any installed override
pub fn reset_catalog() {
    *ACTIVE_CATALOG.write() = None;
}
