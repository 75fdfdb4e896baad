//! Centralized path definitions for recommender
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/recommender/
//! └── config.toml               # Catalog path, matching and output defaults
//! ```
//!
//! `RECOMMENDER_CONFIG` overrides the config file location.

use std::path::PathBuf;

/// Environment variable that overrides the config file path
pub const CONFIG_ENV: &str = "RECOMMENDER_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = "recommender";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global recommender directory.
///
/// Returns `~/.config/recommender/` on Linux (platform config dir elsewhere).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Honors `RECOMMENDER_CONFIG` when set and non-empty.
#[must_use]
pub fn global_config() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map_or_else(|| global_config_dir().join(GLOBAL_CONFIG_FILE), PathBuf::from)
}
