use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::store::{self, DEFAULT_STORAGE_KEY};

/// Public GitHub REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Global configuration loaded from `~/.config/ghx/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GhxConfig {
    /// Base URL of the lookup service; repositories live under `<base>/repos/`.
    pub api_base_url: String,
    /// Sent as `User-Agent` on every lookup (GitHub rejects requests without one).
    pub user_agent: String,
    /// Connect timeout for a lookup, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout for a lookup, in seconds.
    pub timeout_secs: u64,
    /// Key the repository list is stored under.
    pub storage_key: String,
    /// Optional override for the store file; defaults to `~/.local/state/ghx/storage.json`.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

impl Default for GhxConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: concat!("ghx/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_path: None,
        }
    }
}

impl GhxConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Store file to use: the configured override or the XDG default.
    pub fn resolved_storage_path(&self) -> Result<PathBuf> {
        match &self.storage_path {
            Some(p) => Ok(p.clone()),
            None => store::default_path(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ghx")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GhxConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<GhxConfig> {
    if !path.exists() {
        let default_cfg = GhxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: GhxConfig = toml::from_str(&data)?;
    Ok(cfg)
}
