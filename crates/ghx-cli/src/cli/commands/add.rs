//! `ghx add <owner/name>` – look up a repository and append it to the list.

use anyhow::{Context, Result};
use ghx_core::config::GhxConfig;

use super::open_explorer;
use crate::cli::screens;

pub async fn run_add(cfg: &GhxConfig, identifier: &str) -> Result<()> {
    let repositories = tokio::task::spawn_blocking({
        let cfg = cfg.clone();
        let identifier = identifier.to_string();
        move || -> Result<_> {
            let mut explorer = open_explorer(&cfg)?;
            explorer.set_input(identifier);
            explorer.submit()?;
            Ok(explorer.repositories().to_vec())
        }
    })
    .await
    .context("lookup task join")??;
    print!("{}", screens::render_dashboard(&repositories, None));
    Ok(())
}
