//! Mirror of the repository list under a single store key.

use anyhow::{Context, Result};

use super::Storage;
use crate::repository::RepositoryRecord;

/// Compact JSON array of the whole list. Same list, same bytes.
pub fn serialize_repositories(repositories: &[RepositoryRecord]) -> Result<String> {
    serde_json::to_string(repositories).context("serialize repository list")
}

/// Write the full list under `key`, replacing whatever was there.
pub fn save_repositories<S: Storage + ?Sized>(
    store: &mut S,
    key: &str,
    repositories: &[RepositoryRecord],
) -> Result<()> {
    let json = serialize_repositories(repositories)?;
    store
        .set_item(key, &json)
        .with_context(|| format!("persist repository list under {key:?}"))
}

/// Read the list stored under `key`.
///
/// Absent key, unreadable store, or a value that is not a JSON array of
/// records all yield an empty list; startup never fails on stored state.
pub fn load_repositories<S: Storage + ?Sized>(store: &S, key: &str) -> Vec<RepositoryRecord> {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, "could not read stored repositories: {:#}", e);
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(key, "discarding malformed stored repositories: {}", e);
            Vec::new()
        }
    }
}
