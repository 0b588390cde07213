//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Both a TCP address and a Unix socket were configured.
    #[error("'listen' and 'socket' are mutually exclusive; configure only one")]
    ConflictingListeners,

    /// A Unix socket was configured on a platform without Unix sockets.
    #[error("Unix socket listeners are not supported on this platform")]
    SocketUnsupported,

    /// A restart command was configured with a blank program.
    #[error("restart command program must not be empty")]
    EmptyRestartProgram,

    /// The TLS setting name does not match the setting-name charset.
    #[error(
        "Invalid TLS setting name '{name}': expected uppercase letters, digits, and underscores"
    )]
    InvalidTlsKey {
        /// The rejected name
        name: String,
    },
}
