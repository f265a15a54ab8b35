use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;

#[test]
fn cli_parse_add() {
    match parse(&["ghx", "add", "rust-lang/rust"]) {
        CliCommand::Add { identifier } => assert_eq!(identifier, "rust-lang/rust"),
        _ => panic!("expected Add"),
    }
}

#[test]
fn cli_parse_add_requires_identifier() {
    assert!(Cli::try_parse_from(["ghx", "add"]).is_err());
}

#[test]
fn cli_parse_list() {
    match parse(&["ghx", "list"]) {
        CliCommand::List => {}
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_show() {
    match parse(&["ghx", "show", "tokio-rs/tokio"]) {
        CliCommand::Show { full_name } => assert_eq!(full_name, "tokio-rs/tokio"),
        _ => panic!("expected Show"),
    }
}

#[test]
fn cli_parse_open() {
    match parse(&["ghx", "open", "/repository/a/b"]) {
        CliCommand::Open { path } => assert_eq!(path, "/repository/a/b"),
        _ => panic!("expected Open"),
    }
}

#[test]
fn cli_parse_explore() {
    match parse(&["ghx", "explore"]) {
        CliCommand::Explore => {}
        _ => panic!("expected Explore"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["ghx", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    assert!(Cli::try_parse_from(["ghx", "frobnicate"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
