//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// envedit: local HTTP editor for commented `.env` files
///
/// Serves a small API for reading and saving one `.env`-style
/// configuration file, plus SSL certificate/key upload and a static UI.
#[derive(Debug, Parser)]
#[command(name = "envedit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the primary .env file
    #[arg(long = "env-file")]
    pub env_file: Option<PathBuf>,

    /// Path to the fallback template read when the .env file is missing
    #[arg(long = "template-file")]
    pub template_file: Option<PathBuf>,

    /// Directory holding uploaded SSL certificate/key material
    #[arg(long = "ssl-dir")]
    pub ssl_dir: Option<PathBuf>,

    /// Directory of static UI assets served at /
    #[arg(long = "ui-dir")]
    pub ui_dir: Option<PathBuf>,

    /// TCP address to listen on (e.g. 127.0.0.1:8686)
    #[arg(long, conflicts_with = "socket")]
    pub listen: Option<String>,

    /// Unix socket path to listen on instead of TCP (unix only)
    #[arg(long)]
    pub socket: Option<PathBuf>,

    /// Command run after a successful save, program first
    /// (can be specified multiple times to append arguments)
    #[arg(long = "restart-command", value_name = "ARG")]
    pub restart_command: Vec<String>,

    /// Name of the TLS setting updated after a cert+key upload
    #[arg(long = "tls-key", value_name = "KEY")]
    pub tls_key: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for envedit
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "envedit.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
