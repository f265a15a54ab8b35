//! CLI for the GHX repository explorer.

mod commands;
mod screens;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use ghx_core::config::{self, GhxConfig};

use commands::{run_add, run_completions, run_explore, run_list, run_open, run_show};

/// Top-level CLI for the GHX repository explorer.
#[derive(Debug, Parser)]
#[command(name = "ghx")]
#[command(about = "GHX: look up GitHub repositories and keep a list of them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Look up a repository and append it to the list.
    Add {
        /// Repository identifier, e.g. "rust-lang/rust".
        identifier: String,
    },

    /// Show the dashboard: every repository looked up so far.
    List,

    /// Show the detail screen for one repository.
    Show {
        /// Full name of the repository, e.g. "rust-lang/rust".
        full_name: String,
    },

    /// Open a screen by route path ("/" or "/repository/{owner}/{name}").
    Open {
        /// Route path.
        path: String,
    },

    /// Interactive session: type identifiers to look them up, or a route path to open it.
    Explore,

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let load_config = || -> Result<GhxConfig> {
            let cfg = config::load_or_init()?;
            tracing::debug!("loaded config: {:?}", cfg);
            Ok(cfg)
        };

        match cli.command {
            CliCommand::Add { identifier } => run_add(&load_config()?, &identifier).await?,
            CliCommand::List => run_list(&load_config()?).await?,
            CliCommand::Show { full_name } => run_show(&load_config()?, &full_name).await?,
            CliCommand::Open { path } => run_open(&load_config()?, &path).await?,
            CliCommand::Explore => run_explore(&load_config()?).await?,
            CliCommand::Completions { shell } => run_completions(shell, &mut Cli::command()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
