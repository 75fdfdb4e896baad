//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `catalog/` - Catalog files (TOML/JSON) and the built-in catalog

pub mod catalog;
