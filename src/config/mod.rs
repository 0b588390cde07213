//! Configuration layer for envedit.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest
//! to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file** (only read when `--config` is given)
//! 3. **Built-in defaults**
//!
//! The listener is special-cased: `--socket` and `--listen` are mutually
//! exclusive, and a socket configured at either level wins over a TCP
//! address configured at a lower level.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{Listen, ValidatedConfig, write_default_config};
