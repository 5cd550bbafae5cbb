//! Config file discovery and loading for `.templet.toml`.
//!
//! Checks three locations in precedence order:
//! 1. An explicit `--config` path (must exist)
//! 2. `./.templet.toml` (project-local)
//! 3. `~/.config/templet.toml` (user-global)

use std::path::{Path, PathBuf};

use anyhow::Context;
use templet::RegistryConfig;

const CONFIG_FILENAME: &str = ".templet.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "templet.toml";

/// Load the registry config, or an empty one when no file is found.
pub(crate) fn load_registry_config(explicit: Option<&Path>) -> anyhow::Result<RegistryConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_config_file() {
            Some(path) => path,
            None => {
                tracing::debug!("No registry config found, using defaults");
                return Ok(RegistryConfig::default());
            }
        },
    };

    let config = RegistryConfig::load(&path)
        .with_context(|| format!("loading registry config {}", path.display()))?;
    tracing::debug!(?path, "Loaded registry config");
    Ok(config)
}

/// Search for a config file in precedence order.
fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    let global = home_dir()?
        .join(GLOBAL_CONFIG_DIR)
        .join(GLOBAL_CONFIG_FILENAME);
    global.is_file().then_some(global)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}
