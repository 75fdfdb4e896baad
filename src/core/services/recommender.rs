//! Recommendation service - filters a catalog against preferences
//!
//! Results always keep catalog order. No ranking, no limit.

use crate::core::models::{Catalog, Item, Preferences};

use super::matcher::{Criteria, meets_all_criteria};
use super::scoring::{match_message, match_score};

/// A matched item annotated with its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredItem<'a> {
    /// The matched catalog item
    pub item: &'a Item,
    /// Number of active criteria satisfied
    pub score: u8,
    /// Label for `score`
    pub message: &'static str,
}

/// Find all catalog items that meet the default criteria
///
/// An empty result is a normal outcome.
#[must_use]
pub fn find_recommendations<'a>(catalog: &'a Catalog, preferences: &Preferences) -> Vec<&'a Item> {
    catalog
        .iter()
        .filter(|item| meets_all_criteria(item, preferences))
        .collect()
}

/// Find all catalog items that meet an explicit set of criteria
#[must_use]
pub fn find_recommendations_with<'a>(
    catalog: &'a Catalog,
    preferences: &Preferences,
    criteria: &Criteria,
) -> Vec<&'a Item> {
    catalog
        .iter()
        .filter(|item| criteria.meets_all(item, preferences))
        .collect()
}

/// Find matches and annotate each with its score and label
#[must_use]
pub fn score_recommendations<'a>(
    catalog: &'a Catalog,
    preferences: &Preferences,
    criteria: &Criteria,
) -> Vec<ScoredItem<'a>> {
    find_recommendations_with(catalog, preferences, criteria)
        .into_iter()
        .map(|item| {
            let score = match_score(item, preferences);
            ScoredItem {
                item,
                score,
                message: match_message(i64::from(score)),
            }
        })
        .collect()
}
