//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{SelectcatError, SelectcatResult};
use crate::tree::RenderMode;

use super::types::Config;

/// Non-fatal configuration warning surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SelectcatResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SelectcatError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from a config file if present, or fall back to defaults.
/// Environment overrides apply either way.
pub fn load_or_default(path: Option<&Path>) -> Config {
    if let Some(path) = path {
        if path.exists() {
            if let Ok(config) = Config::load(path) {
                return with_env_overrides(config);
            }
            debug!(path = %path.display(), "config file unreadable, using defaults");
        }
    }
    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (SELECTCAT_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(depth) = std::env::var("SELECTCAT_MAX_DEPTH") {
        if let Ok(depth) = depth.parse::<i32>() {
            config.max_depth = depth;
        }
    }

    if let Ok(mode) = std::env::var("SELECTCAT_RENDER_MODE") {
        config.render_mode = match mode.to_lowercase().as_str() {
            "flat" => RenderMode::Flat,
            _ => RenderMode::Nested,
        };
    }

    if let Ok(val) = std::env::var("SELECTCAT_TOPLEVEL_SELECTABLE") {
        config.toplevel_selectable = val.to_lowercase() != "false" && val != "0";
    }

    if let Ok(val) = std::env::var("SELECTCAT_ENABLE_SUBPAGES") {
        config.enable_subpages = val.to_lowercase() != "false" && val != "0";
    }

    config
}
