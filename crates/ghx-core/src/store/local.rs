//! File-backed store: one JSON object of string keys to string values under
//! the XDG state dir, so the repository list survives across runs.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::Storage;

/// Default path for the store file: `~/.local/state/ghx/storage.json`.
pub fn default_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ghx")?;
    Ok(xdg_dirs.get_state_home().join("ghx").join("storage.json"))
}

#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file is an empty store. A file that is not a JSON object of
    /// strings is also treated as empty; the next write replaces it.
    fn read_items(&self) -> Result<BTreeMap<String, String>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e).with_context(|| format!("read store: {}", self.path.display())),
        };
        match serde_json::from_slice(&bytes) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "ignoring malformed store file: {}", e);
                Ok(BTreeMap::new())
            }
        }
    }
}

impl Storage for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_items()?;
        items.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&items).context("serialize store")?;
        write_replace(&self.path, json.as_bytes())
    }
}

/// Sibling temp file for `path`: `storage.json` -> `storage.json.<pid>.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

/// Write `data` to a temp file next to `path`, sync it, then rename it over
/// `path`. Readers see either the old contents or the new, never a partial file.
fn write_replace(path: &Path, data: &[u8]) -> Result<()> {
    let temp = temp_path(path);
    {
        let mut file = std::fs::File::create(&temp)
            .with_context(|| format!("create temp store: {}", temp.display()))?;
        file.write_all(data)
            .with_context(|| format!("write temp store: {}", temp.display()))?;
        file.sync_all().context("store sync failed")?;
    }
    if let Err(e) = std::fs::rename(&temp, path) {
        let _ = std::fs::remove_file(&temp);
        return Err(e).with_context(|| {
            format!("failed to rename {} to {}", temp.display(), path.display())
        });
    }
    Ok(())
}
