//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// File and directory locations
    #[serde(default)]
    pub paths: PathsSection,

    /// Listener configuration
    #[serde(default)]
    pub server: ServerSection,

    /// Restart hook configuration
    #[serde(default)]
    pub restart: RestartSection,

    /// SSL workflow configuration
    #[serde(default)]
    pub ssl: SslSection,
}

/// File and directory locations.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    /// Primary .env file path
    pub env_file: Option<PathBuf>,

    /// Fallback template path
    pub template_file: Option<PathBuf>,

    /// Directory for uploaded SSL material
    pub ssl_dir: Option<PathBuf>,

    /// Directory of static UI assets
    pub ui_dir: Option<PathBuf>,
}

/// Listener configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// TCP address, e.g. "127.0.0.1:8686"
    pub listen: Option<String>,

    /// Unix socket path (unix only); wins over `listen` when set
    pub socket: Option<PathBuf>,
}

/// Restart hook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RestartSection {
    /// Command run after a successful save, program first
    #[serde(default)]
    pub command: Vec<String>,
}

/// SSL workflow configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SslSection {
    /// Name of the TLS setting updated after a cert+key upload
    pub tls_key: Option<String>,
}

impl TomlConfig {
    /// Loads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileRead`] if the file cannot be read or
    /// [`ConfigError::TomlParse`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(::toml::from_str(&content)?)
    }
}

/// Returns the default configuration file template written by `init`.
#[must_use]
pub const fn default_config_template() -> &'static str {
    r#"# envedit configuration file
#
# Values here are overridden by explicit CLI arguments.

[paths]
# Primary .env file edited through the API.
# env_file = "/configs/.env"

# Read-only template served when the .env file does not exist yet.
# template_file = "/configs/.env.template"

# Directory holding uploaded SSL certificate/key material.
# ssl_dir = "/ssl"

# Static UI assets served at /.
# ui_dir = "/ui"

[server]
# TCP listen address.
# listen = "127.0.0.1:8686"

# Unix socket path; mutually exclusive with listen.
# socket = "/run/envedit/socket"

[restart]
# Command run after a successful save, program first.
# command = ["/scripts/servicectl", "restart"]

[ssl]
# Setting updated with the cert/key paths after a completed upload.
# tls_key = "ROCKET_TLS"
"#
}
