//! CLI command handlers. Each command is in its own file.

mod add;
mod completions;
mod explore;
mod list;
mod open;
mod show;

pub use add::run_add;
pub use completions::run_completions;
pub use explore::run_explore;
pub use list::run_list;
pub use open::run_open;
pub use show::run_show;

#[cfg(test)]
pub(crate) use explore::explore_loop;

use anyhow::Result;
use ghx_core::config::GhxConfig;
use ghx_core::explorer::Explorer;
use ghx_core::lookup::HttpLookup;
use ghx_core::store::LocalStore;

pub(crate) type AppExplorer = Explorer<HttpLookup, LocalStore>;

/// Explorer over the configured API and the on-disk store. Blocking; the
/// list is read (and written back) here.
pub(crate) fn open_explorer(cfg: &GhxConfig) -> Result<AppExplorer> {
    let lookup = HttpLookup::from_config(cfg)?;
    let store = LocalStore::new(cfg.resolved_storage_path()?);
    tracing::debug!(path = %store.path().display(), "opening store");
    Ok(Explorer::open(lookup, store, cfg.storage_key.clone()))
}
