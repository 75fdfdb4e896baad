//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the matching engine and the
//! places catalogs come from. Implementations live in the `adapters` module.

mod catalog_source;

pub use catalog_source::CatalogSource;
