use anyhow::{Context, Result};
use directories::ProjectDirs;
use facematch_engine::{Threshold, DEFAULT_THRESHOLD};
use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub static CONFIG_PATH: Lazy<&'static Path> = Lazy::new(|| {
    Path::new(option_env!("FACEMATCH_CONFIG_PATH").unwrap_or("/usr/local/etc/facematch/config.toml"))
});

pub static DEFAULT_STORE_DIR: Lazy<PathBuf> = Lazy::new(|| {
    if let Some(dir) = option_env!("FACEMATCH_STORE_DIR") {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("", "", "facematch")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/var/lib/facematch"))
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum accepted Euclidean distance, exclusive.
    pub threshold: f64,
    /// Root directory holding one sub-directory per collection.
    pub store_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            store_dir: DEFAULT_STORE_DIR.clone(),
        }
    }
}

impl Config {
    pub fn threshold(&self) -> Threshold {
        threshold_from(self.threshold)
    }
}

/// Degenerate values are accepted with a warning and fall back to
/// exact-match-only.
pub fn threshold_from(value: f64) -> Threshold {
    match Threshold::checked(value) {
        Ok(t) => t,
        Err(e) => {
            warn!("{e}");
            Threshold::new(value)
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path.unwrap_or(&CONFIG_PATH);
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config at {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}

pub fn save_config(cfg: &Config, path: Option<&Path>) -> Result<()> {
    let path = path.unwrap_or(&CONFIG_PATH);
    let data = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, data).with_context(|| format!("writing config {}", path.display()))?;
    Ok(())
}
