//! Business logic services
//!
//! Pure functions that operate on domain models. These services have no
//! I/O dependencies - they take a catalog and preferences and return results.
//!
//! - [`matcher`] - Single-criterion and composite predicates
//! - [`recommender`] - Filter a catalog into matches
//! - [`scoring`] - Score and classify matches

pub mod matcher;
pub mod recommender;
pub mod scoring;

pub use matcher::{
    Criteria, Criterion, fits_time_available, matches_category, matches_mood, meets_all_criteria,
};
pub use recommender::{
    ScoredItem, find_recommendations, find_recommendations_with, score_recommendations,
};
pub use scoring::{MAX_SCORE, match_message, match_score};
