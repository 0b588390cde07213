//! SSL certificate/key upload API.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::json;

use crate::server::AppState;
use crate::ssl::SslKind;

use super::{ApiResult, err_json, ssl_error};

/// Query string selecting which slot a request refers to.
#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    /// `cert` or `key`.
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl SlotQuery {
    fn resolve(&self) -> Result<SslKind, (StatusCode, Json<serde_json::Value>)> {
        self.kind
            .as_deref()
            .and_then(SslKind::from_query)
            .ok_or_else(|| {
                err_json(
                    StatusCode::BAD_REQUEST,
                    "Invalid file type. Must be 'cert' or 'key'",
                )
            })
    }
}

/// Request body for uploading one SSL file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslUploadRequest {
    /// Original filename; only its extension is used.
    pub filename: String,

    /// Base64-encoded file contents.
    pub file_data: String,

    /// Declared size in bytes (informational).
    #[serde(default)]
    pub size: u64,
}

/// PUT /api/ssl/upload?type=cert|key – store uploaded material.
///
/// Once both slots are populated, the TLS setting in the `.env` file is
/// updated with the stored paths (preserving its toggle) and the restart
/// hook fires. Both follow-ups are best-effort.
pub async fn upload(
    State(state): State<AppState>,
    Query(query): Query<SlotQuery>,
    Json(request): Json<SslUploadRequest>,
) -> ApiResult {
    let kind = query.resolve()?;

    let data = BASE64
        .decode(&request.file_data)
        .map_err(|_| err_json(StatusCode::BAD_REQUEST, "Invalid base64 file data"))?;

    let dest = state
        .ssl()
        .upload(kind, &request.filename, &data)
        .map_err(|e| ssl_error(&e))?;

    tracing::info!(
        slot = %kind,
        dest = %dest.display(),
        bytes = data.len(),
        "stored ssl file"
    );

    if let Some(tls_value) = state.ssl().tls_value() {
        if let Err(e) = state.env().update_setting(state.tls_key(), &tls_value) {
            tracing::warn!("failed to update {} after upload: {e}", state.tls_key());
        }
        if let Err(e) = state.restart().notify().await {
            tracing::warn!("restart hook failed after upload: {e}");
        }
    }

    Ok(Json(json!({
        "success": true,
        "message": format!("{} file uploaded successfully", kind.title()),
        "filename": dest,
    })))
}

/// DELETE /api/ssl/delete?type=cert|key – remove the stored file.
pub async fn delete(State(state): State<AppState>, Query(query): Query<SlotQuery>) -> ApiResult {
    let kind = query.resolve()?;
    let removed = state.ssl().delete(kind).map_err(|e| ssl_error(&e))?;

    tracing::info!(slot = %kind, path = %removed.display(), "deleted ssl file");

    Ok(Json(json!({
        "success": true,
        "message": format!("{} file deleted successfully", kind.title()),
    })))
}

/// GET /api/ssl/status – report both slots.
pub async fn status(State(state): State<AppState>) -> ApiResult {
    Ok(Json(json!({
        "cert": state.ssl().info(SslKind::Cert),
        "key": state.ssl().info(SslKind::Key),
    })))
}
