//! `ghx explore` – interactive dashboard.
//!
//! Each line is submitted as a repository identifier and the dashboard is
//! redrawn. A line starting with `/` opens that route. `:q`, `quit` or EOF ends
//! the session. Failures are shown inline; the session keeps going.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use ghx_core::config::GhxConfig;
use ghx_core::explorer::{Explorer, FlowError};
use ghx_core::lookup::RepositoryLookup;
use ghx_core::route::Route;
use ghx_core::store::Storage;

use super::open_explorer;
use crate::cli::screens;

const PROMPT: &str = "repository> ";

pub async fn run_explore(cfg: &GhxConfig) -> Result<()> {
    let cfg = cfg.clone();
    tokio::task::spawn_blocking(move || -> Result<()> {
        let mut explorer = open_explorer(&cfg)?;
        let stdin = io::stdin();
        explore_loop(&mut explorer, stdin.lock(), io::stdout())
    })
    .await
    .context("explore task join")?
}

pub(crate) fn explore_loop<L, S, R, W>(
    explorer: &mut Explorer<L, S>,
    mut input: R,
    mut out: W,
) -> Result<()>
where
    L: RepositoryLookup,
    S: Storage,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", screens::render_dashboard(explorer.repositories(), None))?;
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim();
        if trimmed == ":q" || trimmed == "quit" {
            break;
        }

        if trimmed.starts_with('/') {
            match trimmed.parse::<Route>() {
                Ok(Route::Dashboard) => {
                    let message = explorer.error_message();
                    write!(
                        out,
                        "{}",
                        screens::render_dashboard(explorer.repositories(), message.as_deref())
                    )?;
                }
                Ok(Route::Repository { full_name }) => match explorer.find(&full_name) {
                    Some(record) => write!(out, "{}", screens::render_repository(record))?,
                    None => writeln!(out, "! {}", FlowError::LookupFailed)?,
                },
                Err(e) => writeln!(out, "! {e}")?,
            }
            continue;
        }

        explorer.set_input(line);
        // The outcome is carried by the explorer's error message.
        let _ = explorer.submit();
        let message = explorer.error_message();
        write!(
            out,
            "{}",
            screens::render_dashboard(explorer.repositories(), message.as_deref())
        )?;
    }
    Ok(())
}
