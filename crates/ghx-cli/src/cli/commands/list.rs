//! `ghx list` – show the dashboard.

use anyhow::{Context, Result};
use ghx_core::config::GhxConfig;

use super::open_explorer;
use crate::cli::screens;

pub async fn run_list(cfg: &GhxConfig) -> Result<()> {
    let repositories = tokio::task::spawn_blocking({
        let cfg = cfg.clone();
        move || -> Result<_> { Ok(open_explorer(&cfg)?.repositories().to_vec()) }
    })
    .await
    .context("store task join")??;
    print!("{}", screens::render_dashboard(&repositories, None));
    Ok(())
}
