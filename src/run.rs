//! Service execution: wire the collaborators together and serve.

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

use thiserror::Error;

use envedit::config::ValidatedConfig;
use envedit::restart::RestartHook;
use envedit::server::{AppState, ServeError, start_server};
use envedit::ssl::SslStore;
use envedit::store::EnvStore;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to create a required directory.
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// The directory that could not be created.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server failed.
    #[error(transparent)]
    Serve(#[from] ServeError),
}

/// Builds the application state from config and runs the server until
/// shutdown.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    // The env file's directory and the SSL directory must exist before the
    // first save or upload.
    if let Some(parent) = config.env_file.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir(parent)?;
    }
    create_dir(&config.ssl_dir)?;

    let env = EnvStore::new(&config.env_file, &config.template_file);
    let ssl = SslStore::new(&config.ssl_dir);
    let restart = RestartHook::from_command_line(&config.restart_command);

    if !restart.is_enabled() {
        tracing::info!("no restart command configured; saves will not restart any service");
    }

    let state = AppState::new(env, ssl, restart, &config.tls_key, &config.ui_dir);

    start_server(state, config.listen).await?;

    tracing::info!("shutdown complete");
    Ok(())
}

fn create_dir(path: &std::path::Path) -> Result<(), RunError> {
    std::fs::create_dir_all(path).map_err(|source| RunError::CreateDir {
        path: path.display().to_string(),
        source,
    })
}
