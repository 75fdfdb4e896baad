//! Item model
//!
//! An item is one recommendable entry in the catalog: something with a
//! display title, a category tag, a mood tag, and a duration.

use serde::Serialize;
use thiserror::Error;

/// Errors raised when an item cannot be constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItemError {
    /// Title was empty or whitespace
    #[error("item title must not be empty")]
    EmptyTitle,

    /// A required field was absent from the source record
    #[error("missing required field `{field}`")]
    MissingField {
        /// Name of the absent field as it appears in the catalog file
        field: &'static str,
    },
}

/// A recommendable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Display label
    title: String,

    /// Category tag (open set), compared by equality
    category: String,

    /// Mood tag (open set), compared by equality
    mood: String,

    /// Duration in minutes
    time_minutes: u32,
}

impl Item {
    /// Create a new item
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::EmptyTitle`] if the title is blank.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        mood: impl Into<String>,
        time_minutes: u32,
    ) -> Result<Self, ItemError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ItemError::EmptyTitle);
        }

        Ok(Self {
            title,
            category: category.into(),
            mood: mood.into(),
            time_minutes,
        })
    }

    /// Display label
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Category tag
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Mood tag
    #[must_use]
    pub fn mood(&self) -> &str {
        &self.mood
    }

    /// Duration in minutes
    #[must_use]
    pub const fn time_minutes(&self) -> u32 {
        self.time_minutes
    }
}
