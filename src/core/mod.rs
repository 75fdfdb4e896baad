//! Core domain logic for recommender
//!
//! This module contains pure business logic with no I/O dependencies.
//! Catalog loading is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Item, Catalog, Preferences)
//! - `services/` - Matching, filtering, scoring
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
