//! Global configuration management
//!
//! Config is stored at `~/.config/recommender/config.toml` (XDG standard).
//! Every field has a default, so a missing or partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::services::Criteria;
use crate::paths;

/// Global recommender configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Where the catalog comes from
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// How items are matched
    #[serde(default)]
    pub matching: MatchingConfig,
    /// How results are shown
    #[serde(default)]
    pub output: OutputConfig,
}

/// Catalog location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a `.toml` or `.json` catalog (None = built-in catalog)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Matching options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Also require the category preference to match
    #[serde(default)]
    pub category_filter: bool,
}

/// Output options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Show match score and label on each card
    #[serde(default)]
    pub show_scores: bool,
}

impl MatchingConfig {
    /// Criteria set selected by this config
    #[must_use]
    pub fn criteria(&self) -> Criteria {
        if self.category_filter {
            Criteria::with_category()
        } else {
            Criteria::default()
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or use defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring config: {err:#}");
                Self::default()
            },
        }
    }

    /// Load config from a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
