//! Domain models for recommender
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Item`] - One recommendable entry
//! - [`Catalog`] - The ordered list of items a query runs against
//! - [`Preferences`] - One user query's optional constraints

mod catalog;
mod item;
mod preferences;

pub use catalog::{Catalog, CatalogError};
pub use item::{Item, ItemError};
pub use preferences::{Preferences, PreferencesError};
