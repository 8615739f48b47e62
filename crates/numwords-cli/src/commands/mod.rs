pub mod batch;
pub mod config;
pub mod convert;
pub mod format;

use std::path::PathBuf;

use numwords_core::NumWordsConfig;
use tracing::debug;

/// Per-user config file managed by `numwords config`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("numwords")
        .join("config.json")
}

/// The `--config` path if given, otherwise the per-user file.
pub fn resolve_config_path(config_path: Option<&str>) -> PathBuf {
    config_path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load the config file given with `--config`, else the per-user file if it
/// exists, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<NumWordsConfig> {
    if let Some(path) = config_path {
        return Ok(NumWordsConfig::from_file(&PathBuf::from(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Using config file {}", path.display());
        Ok(NumWordsConfig::from_file(&path)?)
    } else {
        Ok(NumWordsConfig::default())
    }
}
