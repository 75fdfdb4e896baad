//! Command implementations

mod catalog;
mod message;
mod recommend;

use std::path::PathBuf;

use anyhow::Context;

use recommender::adapters::catalog::{BuiltinCatalog, FileCatalogSource};
use recommender::config::GlobalConfig;
use recommender::core::models::Catalog;
use recommender::core::ports::CatalogSource;

pub use catalog::catalog;
pub use message::message;
pub use recommend::{RecommendArgs, recommend};

/// Catalog selection shared by commands
#[derive(Debug, Default)]
pub struct CatalogArgs {
    /// Explicit catalog path (overrides config)
    pub path: Option<PathBuf>,
}

/// Pick a catalog source: CLI flag, then config, then built-in
fn catalog_source(args: &CatalogArgs, config: &GlobalConfig) -> Box<dyn CatalogSource> {
    match args.path.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => Box::new(FileCatalogSource::new(path.clone())),
        None => Box::new(BuiltinCatalog),
    }
}

/// Load the active catalog, returning it with its origin
fn load_catalog(args: &CatalogArgs, config: &GlobalConfig) -> anyhow::Result<(Catalog, String)> {
    let source = catalog_source(args, config);
    let origin = source.origin();
    let catalog = source
        .load()
        .with_context(|| format!("could not load catalog from {origin}"))?;
    Ok((catalog, origin))
}
