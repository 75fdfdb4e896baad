//! recommender - Match a catalog of options against user preferences
//!
//! This library provides the preference-matching engine (predicates,
//! filtering, scoring), catalog loading, configuration, and output
//! rendering used by the `recommender` CLI.
//!
//! ```
//! use recommender::core::models::{Catalog, Item, Preferences};
//! use recommender::core::services::find_recommendations;
//!
//! let catalog = Catalog::new(
//!     "Example",
//!     "",
//!     vec![
//!         Item::new("A", "category-a", "relaxed", 30).unwrap(),
//!         Item::new("B", "category-b", "energetic", 60).unwrap(),
//!     ],
//! );
//! let prefs = Preferences::new().with_mood("relaxed").with_time(45);
//! let matches = find_recommendations(&catalog, &prefs);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].title(), "A");
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
