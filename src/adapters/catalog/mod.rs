//! Catalog sources
//!
//! Implements `CatalogSource` for catalog files and the bundled example.
//!
//! - [`parser`] - Deserialize and validate TOML/JSON catalog documents
//! - [`file`] - `FileCatalogSource` for `.toml` / `.json` files
//! - [`builtin`] - `BuiltinCatalog` compiled into the binary

pub mod builtin;
pub mod file;
pub mod parser;

pub use builtin::BuiltinCatalog;
pub use file::{CatalogFormat, FileCatalogSource};
pub use parser::{CatalogFile, ItemEntry, parse_json, parse_toml};
