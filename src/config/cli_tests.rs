//! Tests for CLI argument parsing.

use clap::Parser;

use super::*;

#[test]
fn no_arguments_parse() {
    let cli = Cli::parse_from_iter(["envedit"]);
    assert!(cli.command.is_none());
    assert!(cli.env_file.is_none());
    assert!(cli.listen.is_none());
    assert!(cli.restart_command.is_empty());
    assert!(!cli.verbose);
}

#[test]
fn path_options_parse() {
    let cli = Cli::parse_from_iter([
        "envedit",
        "--env-file",
        "/tmp/.env",
        "--template-file",
        "/tmp/.env.template",
        "--ssl-dir",
        "/tmp/ssl",
        "--ui-dir",
        "/tmp/ui",
    ]);
    assert_eq!(cli.env_file.unwrap(), std::path::PathBuf::from("/tmp/.env"));
    assert_eq!(cli.ssl_dir.unwrap(), std::path::PathBuf::from("/tmp/ssl"));
}

#[test]
fn restart_command_accumulates_arguments() {
    let cli = Cli::parse_from_iter([
        "envedit",
        "--restart-command",
        "/scripts/ctl",
        "--restart-command",
        "restart",
    ]);
    assert_eq!(cli.restart_command, vec!["/scripts/ctl", "restart"]);
}

#[test]
fn listen_and_socket_conflict() {
    let result = Cli::try_parse_from(["envedit", "--listen", "0.0.0.0:1", "--socket", "/run/s"]);
    assert!(result.is_err());
}

#[test]
fn init_subcommand_parses() {
    let cli = Cli::parse_from_iter(["envedit", "init", "--output", "custom.toml"]);
    assert!(cli.is_init());
    let Some(Command::Init { output }) = cli.command else {
        panic!("expected init command");
    };
    assert_eq!(output, std::path::PathBuf::from("custom.toml"));
}

#[test]
fn verbose_flag_parses() {
    let cli = Cli::parse_from_iter(["envedit", "-v"]);
    assert!(cli.verbose);
}
