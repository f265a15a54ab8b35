//! `ghx show <owner/name>` – detail screen for one repository.

use anyhow::{Context, Result};
use ghx_core::config::GhxConfig;
use ghx_core::explorer::FlowError;
use ghx_core::lookup::RepositoryLookup;
use ghx_core::repository::RepositoryRecord;

use super::open_explorer;
use crate::cli::screens;

pub async fn run_show(cfg: &GhxConfig, full_name: &str) -> Result<()> {
    let record = tokio::task::spawn_blocking({
        let cfg = cfg.clone();
        let full_name = full_name.to_string();
        move || resolve_repository(&cfg, &full_name)
    })
    .await
    .context("lookup task join")??;
    print!("{}", screens::render_repository(&record));
    Ok(())
}

/// The record from the list, or a live lookup (not appended) if it isn't there.
fn resolve_repository(cfg: &GhxConfig, full_name: &str) -> Result<RepositoryRecord> {
    let explorer = open_explorer(cfg)?;
    if let Some(record) = explorer.find(full_name) {
        return Ok(record.clone());
    }
    tracing::debug!(full_name, "not in list; fetching");
    explorer.lookup().fetch(full_name).map_err(|e| {
        tracing::warn!(full_name, "lookup failed: {}", e);
        anyhow::Error::from(FlowError::LookupFailed)
    })
}
