//! Catalog file parser
//!
//! Handles deserializing TOML and JSON catalog documents and validating
//! their entries into domain items.
//!
//! Both formats share one shape:
//!
//! ```toml
//! domain = "Weekend activities"
//! description = "Things to do with a free afternoon"
//!
//! [[option]]
//! title = "Board game night"
//! category = "social"
//! mood = "relaxed"
//! time_minutes = 90
//! ```
//!
//! JSON uses `"options": [...]` and accepts `timeMinutes` as well.

use serde::Deserialize;

use crate::core::models::{Catalog, CatalogError, Item, ItemError};

/// A catalog document as written on disk
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
    /// What kind of things are recommended
    #[serde(default)]
    pub domain: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Raw item entries, in file order
    #[serde(default, rename = "option", alias = "options")]
    pub options: Vec<ItemEntry>,
}

/// An item entry before validation
///
/// Every field is optional here so that a missing field is reported with
/// its position instead of as an opaque parse error.
#[derive(Debug, Default, Deserialize)]
pub struct ItemEntry {
    /// Display label
    pub title: Option<String>,

    /// Category tag
    pub category: Option<String>,

    /// Mood tag
    pub mood: Option<String>,

    /// Duration in minutes
    #[serde(alias = "timeMinutes")]
    pub time_minutes: Option<u32>,
}

impl ItemEntry {
    /// Validate this entry into an [`Item`]
    ///
    /// # Errors
    ///
    /// Returns an [`ItemError`] naming the first missing field, or
    /// [`ItemError::EmptyTitle`].
    pub fn into_item(self) -> Result<Item, ItemError> {
        let title = self.title.ok_or(ItemError::MissingField { field: "title" })?;
        let category = self.category.ok_or(ItemError::MissingField { field: "category" })?;
        let mood = self.mood.ok_or(ItemError::MissingField { field: "mood" })?;
        let time_minutes = self
            .time_minutes
            .ok_or(ItemError::MissingField { field: "time_minutes" })?;

        Item::new(title, category, mood, time_minutes)
    }
}

impl CatalogFile {
    /// Validate every entry and build a [`Catalog`]
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedItem`] for the first invalid entry.
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let options = self
            .options
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .into_item()
                    .map_err(|source| CatalogError::MalformedItem { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog::new(self.domain, self.description, options))
    }
}

/// Parse a TOML catalog document
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] if the content is not valid TOML of the
/// expected shape, or [`CatalogError::MalformedItem`] for an invalid entry.
pub fn parse_toml(content: &str, origin: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(content).map_err(|e| CatalogError::Parse {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;
    file.into_catalog()
}

/// Parse a JSON catalog document
///
/// # Errors
///
/// Same as [`parse_toml`].
pub fn parse_json(content: &str, origin: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = serde_json::from_str(content).map_err(|e| CatalogError::Parse {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;
    file.into_catalog()
}
