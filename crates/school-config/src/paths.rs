//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/school-desk/`, `~/.cache/school-desk/`
//! - macOS: `~/Library/Application Support/school-desk/`, `~/Library/Caches/school-desk/`
//! - Windows: `%APPDATA%\school-desk\`, `%LOCALAPPDATA%\school-desk\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "school-desk";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
///
/// Release builds write their log files here.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {:?}", dir))?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
