//! Catalog model
//!
//! The catalog is the ordered, immutable list of items a query runs against,
//! plus a short description of what is being recommended.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use super::{Item, ItemError};

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Catalog content was not valid TOML/JSON for the expected shape
    #[error("failed to parse catalog {origin}: {message}")]
    Parse {
        /// Where the content came from (a path or "built-in")
        origin: String,
        /// Parser error message
        message: String,
    },

    /// File extension does not map to a known catalog format
    #[error("unsupported catalog format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    /// An entry failed validation
    #[error("malformed item at index {index}: {source}")]
    MalformedItem {
        /// Zero-based position of the entry in the catalog
        index: usize,
        /// What was wrong with it
        #[source]
        source: ItemError,
    },
}

/// An ordered, read-only collection of items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    domain: String,
    description: String,
    options: Vec<Item>,
}

impl Catalog {
    /// Create a catalog from already-validated items
    #[must_use]
    pub fn new(
        domain: impl Into<String>,
        description: impl Into<String>,
        options: Vec<Item>,
    ) -> Self {
        Self {
            domain: domain.into(),
            description: description.into(),
            options,
        }
    }

    /// What kind of things this catalog recommends
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Free-form description of the catalog
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// All items, in catalog order
    #[must_use]
    pub fn options(&self) -> &[Item] {
        &self.options
    }

    /// Iterate items in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.options.iter()
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True if the catalog holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
