//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same predicate logic with different inputs.

use recommender::core::models::Preferences;
use recommender::core::services::{
    Criteria, find_recommendations, fits_time_available, match_message, matches_category,
    matches_mood, meets_all_criteria,
};
use test_case::test_case;

use crate::common::{ItemBuilder, sample_catalog, titles};

// =============================================================================
// Mood Tests
// =============================================================================

#[test_case("relaxed", None, true ; "unset mood matches")]
#[test_case("relaxed", Some(""), true ; "empty mood matches")]
#[test_case("relaxed", Some("relaxed"), true ; "same mood matches")]
#[test_case("relaxed", Some("energetic"), false ; "different mood rejects")]
#[test_case("relaxed", Some("RELAXED"), false ; "mood is case sensitive")]
#[test_case("relaxed", Some("relax"), false ; "no partial mood match")]
fn test_matches_mood(item_mood: &str, desired: Option<&str>, expected: bool) {
    let item = ItemBuilder::new().mood(item_mood).build();
    assert_eq!(matches_mood(&item, desired), expected);
}

// =============================================================================
// Time Tests
// =============================================================================

#[test_case(30, None, true ; "unset budget fits")]
#[test_case(30, Some(0.0), true ; "zero budget fits")]
#[test_case(30, Some(29.0), false ; "one minute short rejects")]
#[test_case(30, Some(30.0), true ; "exact budget fits")]
#[test_case(30, Some(31.0), true ; "larger budget fits")]
#[test_case(0, Some(1.0), true ; "instant item fits")]
#[test_case(45, Some(45.5), true ; "fractional budget above fits")]
#[test_case(46, Some(45.5), false ; "fractional budget below rejects")]
#[test_case(0, Some(0.5), true ; "half minute fits instant item")]
#[test_case(1, Some(0.5), false ; "half minute still constrains")]
fn test_fits_time_available(minutes: u32, budget: Option<f64>, expected: bool) {
    let item = ItemBuilder::new().minutes(minutes).build();
    assert_eq!(fits_time_available(&item, budget), expected);
}

// =============================================================================
// Category Tests
// =============================================================================

#[test_case("outdoors", None, true ; "unset category matches")]
#[test_case("outdoors", Some(""), true ; "empty category matches")]
#[test_case("outdoors", Some("outdoors"), true ; "same category matches")]
#[test_case("outdoors", Some("indoors"), false ; "different category rejects")]
fn test_matches_category(item_category: &str, desired: Option<&str>, expected: bool) {
    let item = ItemBuilder::new().category(item_category).build();
    assert_eq!(matches_category(&item, desired), expected);
}

// =============================================================================
// Composite Tests
// =============================================================================

#[test_case(None, None, true ; "no constraints")]
#[test_case(Some("relaxed"), None, true ; "mood only")]
#[test_case(None, Some(30.0), true ; "time only")]
#[test_case(Some("relaxed"), Some(30.0), true ; "both satisfied")]
#[test_case(Some("energetic"), Some(30.0), false ; "mood fails")]
#[test_case(Some("relaxed"), Some(10.0), false ; "time fails")]
#[test_case(Some("energetic"), Some(10.0), false ; "both fail")]
fn test_meets_all_criteria(mood: Option<&str>, time: Option<f64>, expected: bool) {
    let item = ItemBuilder::new().mood("relaxed").minutes(30).build();
    let prefs = Preferences {
        mood: mood.map(String::from),
        time,
        category: Some("never-matches".to_string()),
    };
    assert_eq!(meets_all_criteria(&item, &prefs), expected);
    assert_eq!(Criteria::default().meets_all(&item, &prefs), expected);
}

// =============================================================================
// Classification Tests
// =============================================================================

#[test_case(3, "Perfect match!" ; "three")]
#[test_case(2, "Great option" ; "two")]
#[test_case(1, "Worth considering" ; "one")]
#[test_case(0, "Might work" ; "zero")]
#[test_case(-1, "Might work" ; "negative")]
#[test_case(5, "Might work" ; "above range")]
fn test_match_message(score: i64, expected: &str) {
    assert_eq!(match_message(score), expected);
}

// =============================================================================
// Preferences Coercion Tests
// =============================================================================

#[test_case(Some("45"), Some(45.0) ; "plain number")]
#[test_case(Some(" 45 "), Some(45.0) ; "padded number")]
#[test_case(Some("45.5"), Some(45.5) ; "fractional number")]
#[test_case(Some("0.5"), Some(0.5) ; "half minute")]
#[test_case(Some("0"), Some(0.0) ; "zero kept as given")]
#[test_case(Some(""), None ; "empty string")]
#[test_case(None, None ; "absent")]
fn test_time_coercion(raw: Option<&str>, expected: Option<f64>) {
    let prefs = Preferences::from_raw(None, raw, None).unwrap();
    assert_eq!(prefs.time, expected);
}

#[test_case("abc" ; "letters")]
#[test_case("-5" ; "negative")]
#[test_case("-0.5" ; "negative fraction")]
#[test_case("NaN" ; "not a number")]
#[test_case("inf" ; "infinite")]
fn test_time_coercion_errors(raw: &str) {
    assert!(Preferences::from_raw(None, Some(raw), None).is_err(), "expected error for {raw:?}");
}

#[test_case("45.5", &["A"] ; "fractional budget keeps item within it")]
#[test_case("0.5", &[] ; "half minute budget still constrains")]
fn test_fractional_budget_filters(raw: &str, expected: &[&str]) {
    let catalog = sample_catalog();
    let prefs = Preferences::from_raw(Some("relaxed"), Some(raw), None).unwrap();
    assert_eq!(titles(&find_recommendations(&catalog, &prefs)), expected);
}
