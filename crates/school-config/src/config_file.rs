use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".school-desk.toml";

/// Load config file content from CWD first, then home directory, then the
/// application config directory
///
/// Searches for:
/// 1. `.school-desk.toml` in the current working directory
/// 2. `~/.school-desk.toml`
/// 3. `config.toml` in the application config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    let candidates = search_order(
        get_home_config_path(),
        crate::paths::app_config_path().ok(),
    );

    for path in candidates {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }
    None
}

/// Paths to try, in order; locations that cannot be determined are skipped
fn search_order(home_config: Option<PathBuf>, app_config: Option<PathBuf>) -> Vec<PathBuf> {
    std::iter::once(PathBuf::from(CONFIG_FILE))
        .chain(home_config)
        .chain(app_config)
        .collect()
}

/// Returns ~/.school-desk.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
