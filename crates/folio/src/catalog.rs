//! Catalog loading for the CLI.

use anyhow::{Context, Result};
use tracing::debug;

use folio_core::catalog::Catalog;

use crate::config::Config;

/// Load the catalog named in the config, or the embedded sample when
/// no path is configured.
pub fn load(config: &Config) -> Result<Catalog> {
    let catalog = match &config.catalog.path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog {}", path.display()))?;
            Catalog::from_json(&raw)?
        }
        None => Catalog::sample(),
    };
    debug!(
        projects = catalog.projects.len(),
        skills = catalog.skills.len(),
        "catalog loaded"
    );
    Ok(catalog)
}
