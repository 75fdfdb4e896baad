//! Match scoring and classification
//!
//! A match score counts how many of the user's stated preferences an item
//! satisfies. Unset preferences are not counted, so a query with only a
//! mood can score at most 1.

use crate::core::models::{Item, Preferences};

use super::matcher::Criterion;

/// Highest score [`match_score`] can produce
pub const MAX_SCORE: u8 = 3;

/// Classify a match score into a short label
///
/// Any score outside `1..=3` falls through to the default label.
#[must_use]
pub const fn match_message(match_score: i64) -> &'static str {
    match match_score {
        3 => "Perfect match!",
        2 => "Great option",
        1 => "Worth considering",
        _ => "Might work",
    }
}

/// Count the active criteria an item satisfies
#[must_use]
pub fn match_score(item: &Item, preferences: &Preferences) -> u8 {
    let satisfied = Criterion::ALL
        .iter()
        .filter(|c| c.is_active(preferences) && c.is_satisfied(item, preferences))
        .count();
    u8::try_from(satisfied).unwrap_or(MAX_SCORE)
}
