// src/infra/paths.rs — Config file location
//
// CUPDASH_HOME overrides everything. Otherwise config lives in ~/.cupdash/.

use std::path::PathBuf;

/// Returns the CUPDASH_HOME override, if set.
fn cupdash_home() -> Option<PathBuf> {
    std::env::var_os("CUPDASH_HOME").map(PathBuf::from)
}

/// Configuration directory: $CUPDASH_HOME/ or ~/.cupdash/
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = cupdash_home() {
        return Some(home);
    }
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".cupdash"))
}

pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
