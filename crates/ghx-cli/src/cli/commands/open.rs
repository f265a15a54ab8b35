//! `ghx open <path>` – navigate to a screen by route path.

use anyhow::Result;
use ghx_core::config::GhxConfig;
use ghx_core::route::Route;

use super::{run_list, run_show};

pub async fn run_open(cfg: &GhxConfig, path: &str) -> Result<()> {
    match path.parse::<Route>()? {
        Route::Dashboard => run_list(cfg).await,
        Route::Repository { full_name } => run_show(cfg, &full_name).await,
    }
}
