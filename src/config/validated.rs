//! Validated configuration merged from CLI, TOML, and defaults.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::{Cli, ConfigError, TomlConfig, default_config_template, defaults};

/// Pattern for a valid setting name, shared with the text model's
/// classifier charset.
static TLS_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9_]+$").expect("tls key pattern is valid"));

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listen {
    /// A TCP address like `127.0.0.1:8686`.
    Tcp(String),

    /// A Unix socket path (unix targets only).
    Unix(PathBuf),
}

impl fmt::Display for Listen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp(addr) => write!(f, "http://{addr}"),
            Self::Unix(path) => write!(f, "unix:{}", path.display()),
        }
    }
}

/// Fully resolved and validated configuration.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Primary `.env` file path.
    pub env_file: PathBuf,

    /// Fallback template path.
    pub template_file: PathBuf,

    /// Directory for uploaded SSL material.
    pub ssl_dir: PathBuf,

    /// Directory of static UI assets.
    pub ui_dir: PathBuf,

    /// Listener address.
    pub listen: Listen,

    /// Restart command line (program first), empty when disabled.
    pub restart_command: Vec<String>,

    /// Name of the TLS setting updated after a cert+key upload.
    pub tls_key: String,

    /// Verbose logging flag.
    pub verbose: bool,
}

impl ValidatedConfig {
    /// Loads configuration with CLI > TOML > defaults precedence.
    ///
    /// The TOML file is only read when `--config` was given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unreadable/invalid TOML, conflicting
    /// listener configuration, an invalid TLS setting name, or a restart
    /// command with a blank program.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => TomlConfig::load(path)?,
            None => TomlConfig::default(),
        };

        let listen = resolve_listener(cli, &file)?;

        let tls_key = cli
            .tls_key
            .clone()
            .or(file.ssl.tls_key)
            .unwrap_or_else(|| defaults::TLS_KEY.to_string());
        if !TLS_KEY_RE.is_match(&tls_key) {
            return Err(ConfigError::InvalidTlsKey { name: tls_key });
        }

        let restart_command = if cli.restart_command.is_empty() {
            file.restart.command
        } else {
            cli.restart_command.clone()
        };
        // An empty Vec means the hook is disabled; a configured hook needs
        // a runnable program up front rather than a spawn failure per save.
        if restart_command
            .first()
            .is_some_and(|program| program.trim().is_empty())
        {
            return Err(ConfigError::EmptyRestartProgram);
        }

        Ok(Self {
            env_file: resolve_path(&cli.env_file, file.paths.env_file, defaults::ENV_FILE),
            template_file: resolve_path(
                &cli.template_file,
                file.paths.template_file,
                defaults::TEMPLATE_FILE,
            ),
            ssl_dir: resolve_path(&cli.ssl_dir, file.paths.ssl_dir, defaults::SSL_DIR),
            ui_dir: resolve_path(&cli.ui_dir, file.paths.ui_dir, defaults::UI_DIR),
            listen,
            restart_command,
            tls_key,
            verbose: cli.verbose,
        })
    }
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "envedit: env={} template={} ssl={} ui={} listen={} restart={}",
            self.env_file.display(),
            self.template_file.display(),
            self.ssl_dir.display(),
            self.ui_dir.display(),
            self.listen,
            if self.restart_command.is_empty() {
                "disabled"
            } else {
                "configured"
            },
        )
    }
}

/// Resolves one path option with CLI > TOML > default precedence.
fn resolve_path(cli: &Option<PathBuf>, file: Option<PathBuf>, default: &str) -> PathBuf {
    cli.clone()
        .or(file)
        .unwrap_or_else(|| PathBuf::from(default))
}

/// Resolves the listener with conflict checking.
///
/// Within one level a socket and address conflict; across levels the CLI
/// wins outright, otherwise a TOML socket wins over a TOML address.
fn resolve_listener(cli: &Cli, file: &TomlConfig) -> Result<Listen, ConfigError> {
    // clap already rejects --listen together with --socket; the TOML file
    // needs the same check here.
    if cli.listen.is_none()
        && cli.socket.is_none()
        && file.server.listen.is_some()
        && file.server.socket.is_some()
    {
        return Err(ConfigError::ConflictingListeners);
    }

    let socket = cli.socket.clone().or_else(|| {
        if cli.listen.is_some() {
            None
        } else {
            file.server.socket.clone()
        }
    });

    if let Some(path) = socket {
        if cfg!(unix) {
            return Ok(Listen::Unix(path));
        }
        return Err(ConfigError::SocketUnsupported);
    }

    Ok(Listen::Tcp(
        cli.listen
            .clone()
            .or_else(|| file.server.listen.clone())
            .unwrap_or_else(|| defaults::LISTEN.to_string()),
    ))
}

/// Writes the default configuration template to the given path.
///
/// # Errors
///
/// Returns [`ConfigError::FileWrite`] if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_config_template()).map_err(|source| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
