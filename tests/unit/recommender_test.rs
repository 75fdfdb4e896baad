//! Tests for filtering and scoring a catalog

use recommender::core::models::{Catalog, Preferences};
use recommender::core::services::{
    Criteria, find_recommendations, find_recommendations_with, score_recommendations,
};

use crate::common::{ItemBuilder, sample_catalog, titles};

// =============================================================================
// END-TO-END SCENARIOS
// =============================================================================

#[test]
fn test_mood_excludes_other_items() {
    let catalog = sample_catalog();
    let prefs = Preferences::new().with_mood("relaxed").with_time(45);

    assert_eq!(titles(&find_recommendations(&catalog, &prefs)), vec!["A"]);
}

#[test]
fn test_vacuous_preferences_return_full_catalog() {
    let catalog = sample_catalog();
    let prefs = Preferences::from_raw(Some(""), Some("0"), None).unwrap();

    assert_eq!(titles(&find_recommendations(&catalog, &prefs)), vec!["A", "B"]);
}

#[test]
fn test_unknown_mood_is_empty_not_error() {
    let catalog = sample_catalog();
    let prefs = Preferences::new().with_mood("chill");

    assert!(find_recommendations(&catalog, &prefs).is_empty());
}

#[test]
fn test_empty_catalog_gives_empty_result() {
    let catalog = Catalog::default();
    let prefs = Preferences::new().with_mood("relaxed").with_time(10);

    assert!(find_recommendations(&catalog, &prefs).is_empty());
}

// =============================================================================
// ORDERING
// =============================================================================

#[test]
fn test_results_keep_catalog_order_not_relevance() {
    let catalog = Catalog::new(
        "D",
        "",
        vec![
            ItemBuilder::new().title("long").minutes(90).build(),
            ItemBuilder::new().title("short").minutes(10).build(),
            ItemBuilder::new().title("mid").minutes(45).build(),
        ],
    );
    let prefs = Preferences::new().with_time(90);

    assert_eq!(
        titles(&find_recommendations(&catalog, &prefs)),
        vec!["long", "short", "mid"]
    );
}

#[test]
fn test_duplicate_titles_are_kept() {
    let catalog = Catalog::new(
        "D",
        "",
        vec![
            ItemBuilder::new().title("same").build(),
            ItemBuilder::new().title("same").build(),
        ],
    );

    assert_eq!(find_recommendations(&catalog, &Preferences::new()).len(), 2);
}

// =============================================================================
// CATEGORY OPT-IN
// =============================================================================

#[test]
fn test_category_is_ignored_by_default() {
    let catalog = sample_catalog();
    let prefs = Preferences::new().with_category("category-a");

    assert_eq!(titles(&find_recommendations(&catalog, &prefs)), vec!["A", "B"]);
}

#[test]
fn test_category_filter_when_enabled() {
    let catalog = sample_catalog();
    let prefs = Preferences::new().with_category("category-a");
    let matches = find_recommendations_with(&catalog, &prefs, &Criteria::with_category());

    assert_eq!(titles(&matches), vec!["A"]);
}

// =============================================================================
// SCORING
// =============================================================================

#[test]
fn test_scores_count_stated_preferences() {
    let catalog = sample_catalog();
    let prefs = Preferences::new()
        .with_mood("relaxed")
        .with_time(45)
        .with_category("category-a");
    let scored = score_recommendations(&catalog, &prefs, &Criteria::default());

    assert_eq!(scored.len(), 1);
    assert_eq!(scored[0].score, 3);
    assert_eq!(scored[0].message, "Perfect match!");
}

#[test]
fn test_scores_with_unmatched_category() {
    let catalog = sample_catalog();
    let prefs = Preferences::new()
        .with_time(60)
        .with_category("category-b");
    let scored = score_recommendations(&catalog, &prefs, &Criteria::default());

    // Both match on time; only B also matches the category.
    assert_eq!(scored.len(), 2);
    assert_eq!((scored[0].score, scored[0].message), (1, "Worth considering"));
    assert_eq!((scored[1].score, scored[1].message), (2, "Great option"));
}

#[test]
fn test_unconstrained_scores_zero() {
    let catalog = sample_catalog();
    let scored = score_recommendations(&catalog, &Preferences::new(), &Criteria::default());

    assert!(scored.iter().all(|s| s.score == 0 && s.message == "Might work"));
}
