//! Preferences model
//!
//! One user query. Every field is optional, and an absent (or empty) value
//! means "no constraint" for the corresponding criterion.

use serde::Serialize;
use thiserror::Error;

/// Errors raised while coercing raw input into [`Preferences`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferencesError {
    /// Time budget was not a finite, non-negative number of minutes
    #[error("invalid time budget: {0:?} (expected minutes, e.g. 45 or 45.5)")]
    InvalidTime(String),
}

/// A set of optional constraints for a single query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Preferences {
    /// Desired mood tag
    pub mood: Option<String>,

    /// Available time in minutes; zero is treated as unset
    pub time: Option<f64>,

    /// Desired category tag
    pub category: Option<String>,
}

impl Preferences {
    /// Preferences with no constraints
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Coerce raw input values (as typed into a form or on the command line)
    ///
    /// Empty strings become `None`. The time value is trimmed and parsed as
    /// minutes, fractions allowed.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::InvalidTime`] if the time value is present,
    /// non-empty, and not a finite non-negative number.
    pub fn from_raw(
        mood: Option<&str>,
        time: Option<&str>,
        category: Option<&str>,
    ) -> Result<Self, PreferencesError> {
        let time = match time.map(str::trim).filter(|t| !t.is_empty()) {
            Some(raw) => match raw.parse::<f64>() {
                Ok(minutes) if minutes.is_finite() && minutes >= 0.0 => Some(minutes),
                _ => return Err(PreferencesError::InvalidTime(raw.to_string())),
            },
            None => None,
        };

        Ok(Self {
            mood: non_empty(mood),
            time,
            category: non_empty(category),
        })
    }

    /// Set the desired mood
    #[must_use]
    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// Set the available time in minutes
    #[must_use]
    pub fn with_time(mut self, minutes: impl Into<f64>) -> Self {
        self.time = Some(minutes.into());
        self
    }

    /// Set the desired category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Desired mood, or `None` if unset or empty
    #[must_use]
    pub fn mood(&self) -> Option<&str> {
        self.mood.as_deref().filter(|m| !m.is_empty())
    }

    /// Available minutes, or `None` if unset or zero
    #[must_use]
    pub fn time(&self) -> Option<f64> {
        self.time.filter(|&t| t > 0.0)
    }

    /// Desired category, or `None` if unset or empty
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// True when no field constrains the query
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.mood().is_none() && self.time().is_none() && self.category().is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(String::from)
}
