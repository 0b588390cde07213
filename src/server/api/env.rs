//! Environment file editing API.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::json;

use crate::model::{self, Entry};
use crate::server::AppState;

use super::{ApiResult, store_error};

/// Request body for saving the entry list.
#[derive(Debug, Deserialize)]
pub struct SaveEnvRequest {
    /// The full ordered entry list to serialize and write.
    pub variables: Vec<Entry>,
}

/// GET /api/env – parse the current file into structured entries.
pub async fn get_env(State(state): State<AppState>) -> ApiResult {
    let loaded = state.env().load().map_err(|e| store_error(&e))?;
    let variables = model::parse(&loaded.text);

    tracing::debug!(
        path = %loaded.path.display(),
        entries = variables.len(),
        "parsed env file"
    );

    Ok(Json(json!({
        "variables": variables,
        "filePath": loaded.path,
    })))
}

/// PUT /api/env – serialize the entry list and replace the file.
///
/// The previous contents are backed up beside the file, and the restart
/// hook fires after a successful write. Hook failures are logged, never
/// surfaced.
pub async fn save_env(
    State(state): State<AppState>,
    Json(request): Json<SaveEnvRequest>,
) -> ApiResult {
    let text = model::serialize(&request.variables);
    state.env().save(&text).map_err(|e| store_error(&e))?;

    tracing::info!(
        path = %state.env().env_path().display(),
        entries = request.variables.len(),
        "saved env file"
    );

    if let Err(e) = state.restart().notify().await {
        tracing::warn!("restart hook failed after save: {e}");
    }

    Ok(Json(json!({
        "success": true,
        "message": "Environment variables saved successfully",
        "filePath": state.env().env_path(),
        "variables": request.variables,
    })))
}
