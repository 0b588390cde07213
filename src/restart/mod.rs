//! Best-effort service restart hook.
//!
//! After a successful configuration save (or a completed cert+key upload),
//! the service signals "configuration changed" by running a configurable
//! command, typically a service-control script. Hook failures are reported
//! to the caller, which logs and swallows them; they never fail the
//! triggering request.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;
use tokio::process::Command;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// Errors from running the restart command.
#[derive(Debug, Error)]
pub enum RestartError {
    /// The command could not be spawned or awaited.
    #[error("failed to run restart command '{command}': {source}")]
    Spawn {
        /// The configured program.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully.
    #[error("restart command '{command}' exited with {status}")]
    Failed {
        /// The configured program.
        command: String,
        /// The exit status.
        status: ExitStatus,
    },
}

/// The configured restart command, or a no-op when none is configured.
#[derive(Debug, Clone, Default)]
pub struct RestartHook {
    command: Option<(PathBuf, Vec<String>)>,
}

impl RestartHook {
    /// Creates a disabled hook that does nothing on notify.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { command: None }
    }

    /// Creates a hook that runs `program` with `args`.
    #[must_use]
    pub fn command(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            command: Some((program.into(), args)),
        }
    }

    /// Builds a hook from a command line (program followed by arguments).
    /// An empty slice yields the disabled hook.
    #[must_use]
    pub fn from_command_line(parts: &[String]) -> Self {
        match parts.split_first() {
            Some((program, args)) => Self::command(program, args.to_vec()),
            None => Self::disabled(),
        }
    }

    /// Returns `true` if a command is configured.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.command.is_some()
    }

    /// Runs the restart command and waits for it to finish.
    ///
    /// A disabled hook returns immediately.
    ///
    /// # Errors
    ///
    /// Returns [`RestartError`] if the command cannot be run or exits
    /// unsuccessfully. Callers treat this as a best-effort side effect:
    /// log the failure, keep the request successful.
    pub async fn notify(&self) -> Result<(), RestartError> {
        let Some((program, args)) = &self.command else {
            tracing::debug!("no restart command configured, skipping notify");
            return Ok(());
        };

        let command = program.display().to_string();
        tracing::debug!(%command, "running restart command");

        let status = Command::new(program)
            .args(args)
            .status()
            .await
            .map_err(|source| RestartError::Spawn {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(RestartError::Failed { command, status })
        }
    }
}
