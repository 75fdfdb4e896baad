//! Catalog source port
//!
//! Defines the interface for loading a catalog.

use super::super::models::{Catalog, CatalogError};

/// Source of a catalog
///
/// Implementations handle reading and validating a catalog from
/// wherever it lives (a file, data bundled into the binary, etc.)
pub trait CatalogSource: Send + Sync {
    /// Load and validate the full catalog
    fn load(&self) -> Result<Catalog, CatalogError>;

    /// Human-readable description of where the catalog comes from
    fn origin(&self) -> String;
}
