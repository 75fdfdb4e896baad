//! Built-in example catalog
//!
//! A small catalog compiled into the binary so the tool works without any
//! configuration.

use crate::core::models::{Catalog, CatalogError};
use crate::core::ports::CatalogSource;

use super::parser::parse_toml;

const BUILTIN_CATALOG: &str = include_str!("../../../data/catalog.toml");

/// Catalog source for the bundled example data
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = parse_toml(BUILTIN_CATALOG, &self.origin())?;
        log::debug!("Loaded {} built-in item(s)", catalog.len());
        Ok(catalog)
    }

    fn origin(&self) -> String {
        "built-in".to_string()
    }
}
