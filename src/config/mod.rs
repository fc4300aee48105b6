//! Configuration loading for formfill
//!
//! Reads `config.toml` from the user config directory. Missing files and
//! unparseable content fall back to defaults so a broken config never
//! prevents startup.

mod types;

use std::path::PathBuf;

pub use types::{AiConfig, Config, ExportConfig, ServerConfig, ThemeConfig};

const CONFIG_DIR: &str = "formfill";
const CONFIG_FILE: &str = "config.toml";

/// Path to the user config file, if a home directory can be resolved
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from the default location
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    load_config_from_path(&path)
}

/// Load configuration from an explicit path
pub fn load_config_from_path(path: &PathBuf) -> Config {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return Config::default();
    };
    parse_config(&contents)
}

fn parse_config(content: &str) -> Config {
    match toml::from_str::<Config>(content) {
        Ok(config) => config,
        Err(e) => {
            log::debug!("Failed to parse config, using defaults: {}", e);
            Config::default()
        }
    }
}
