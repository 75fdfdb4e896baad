//! File-backed catalog source
//!
//! Implements the `CatalogSource` port for `.toml` and `.json` files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::{Catalog, CatalogError};
use crate::core::ports::CatalogSource;

use super::parser::{parse_json, parse_toml};

/// On-disk catalog formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `[[option]]` tables
    Toml,
    /// `{"options": [...]}`
    Json,
}

impl CatalogFormat {
    /// Pick a format from a file extension (case-insensitive)
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Catalog source backed by a single file
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    /// Create a source for the given path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let path = self.path();
        let format = CatalogFormat::from_path(path)
            .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;

        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;

        let origin = self.origin();
        let catalog = match format {
            CatalogFormat::Toml => parse_toml(&content, &origin)?,
            CatalogFormat::Json => parse_json(&content, &origin)?,
        };

        log::debug!("Loaded {} item(s) from {origin}", catalog.len());
        Ok(catalog)
    }

    fn origin(&self) -> String {
        self.path().display().to_string()
    }
}
