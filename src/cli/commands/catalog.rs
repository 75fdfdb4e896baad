//! Catalog command - list every item in the active catalog

use recommender::config::GlobalConfig;
use recommender::output::{CatalogListing, OutputMode};

use super::{CatalogArgs, load_catalog};

/// List the catalog
pub fn catalog(catalog_args: &CatalogArgs, mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let (catalog, origin) = load_catalog(catalog_args, &config)?;
    CatalogListing::new(&catalog, origin).render(mode);
    Ok(())
}
