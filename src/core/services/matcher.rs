//! Preference matcher service - decides whether an item satisfies a query
//!
//! This module contains pure matching logic with no I/O dependencies.
//! Every predicate is total and treats an unset preference as satisfied.

use crate::core::models::{Item, Preferences};

/// Check whether an item has the desired mood
///
/// Returns `true` when no mood is desired (unset or empty). Otherwise the
/// comparison is exact and case-sensitive.
#[must_use]
pub fn matches_mood(item: &Item, desired_mood: Option<&str>) -> bool {
    match desired_mood {
        None | Some("") => true,
        Some(mood) => item.mood() == mood,
    }
}

/// Check whether an item fits in the available time
///
/// Returns `true` when no budget is given (unset or zero). The upper bound is
/// inclusive, and fractional budgets compare as-is.
#[must_use]
pub fn fits_time_available(item: &Item, available_minutes: Option<f64>) -> bool {
    match available_minutes {
        Some(minutes) if minutes > 0.0 => f64::from(item.time_minutes()) <= minutes,
        _ => true,
    }
}

/// Check whether an item belongs to the desired category
///
/// Same convention as [`matches_mood`]. Not part of [`meets_all_criteria`];
/// see [`Criteria::with_category`].
#[must_use]
pub fn matches_category(item: &Item, desired_category: Option<&str>) -> bool {
    match desired_category {
        None | Some("") => true,
        Some(category) => item.category() == category,
    }
}

/// Check whether an item satisfies every default criterion
///
/// The conjunction of [`matches_mood`] and [`fits_time_available`], evaluated
/// left to right.
#[must_use]
pub fn meets_all_criteria(item: &Item, preferences: &Preferences) -> bool {
    matches_mood(item, preferences.mood.as_deref())
        && fits_time_available(item, preferences.time)
}

/// A single matching criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Item mood equals the desired mood
    Mood,
    /// Item duration fits the time budget
    Time,
    /// Item category equals the desired category
    Category,
}

impl Criterion {
    /// All known criteria, in evaluation order
    pub const ALL: [Self; 3] = [Self::Mood, Self::Time, Self::Category];

    /// Whether the preferences constrain this criterion at all
    #[must_use]
    pub fn is_active(self, preferences: &Preferences) -> bool {
        match self {
            Self::Mood => preferences.mood().is_some(),
            Self::Time => preferences.time().is_some(),
            Self::Category => preferences.category().is_some(),
        }
    }

    /// Evaluate this criterion's predicate
    #[must_use]
    pub fn is_satisfied(self, item: &Item, preferences: &Preferences) -> bool {
        match self {
            Self::Mood => matches_mood(item, preferences.mood.as_deref()),
            Self::Time => fits_time_available(item, preferences.time),
            Self::Category => matches_category(item, preferences.category.as_deref()),
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mood => write!(f, "mood"),
            Self::Time => write!(f, "time"),
            Self::Category => write!(f, "category"),
        }
    }
}

/// The set of criteria a composite match is built from
///
/// The composite is always the plain conjunction of the registered criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    registered: Vec<Criterion>,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            registered: vec![Criterion::Mood, Criterion::Time],
        }
    }
}

impl Criteria {
    /// Default criteria plus category equality
    #[must_use]
    pub fn with_category() -> Self {
        Self {
            registered: vec![Criterion::Mood, Criterion::Time, Criterion::Category],
        }
    }

    /// Registered criteria, in evaluation order
    #[must_use]
    pub fn registered(&self) -> &[Criterion] {
        &self.registered
    }

    /// Check whether an item satisfies every registered criterion
    #[must_use]
    pub fn meets_all(&self, item: &Item, preferences: &Preferences) -> bool {
        self.registered.iter().all(|c| c.is_satisfied(item, preferences))
    }
}
