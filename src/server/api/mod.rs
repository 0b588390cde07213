//! REST API handlers grouped by domain.

pub mod env;
pub mod ssl;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::ssl::SslError;
use crate::store::StoreError;

/// Handler result: JSON body or a status/JSON error pair.
pub type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

/// Standard error response.
pub fn err_json(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(json!({ "success": false, "error": message })),
    )
}

/// Maps env store failures onto the error taxonomy: a missing source is
/// 404, everything else is a server-side I/O failure.
pub fn store_error(err: &StoreError) -> (StatusCode, Json<Value>) {
    let status = match err {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::Read { .. } | StoreError::Write { .. } | StoreError::Backup { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    err_json(status, &err.to_string())
}

/// Maps SSL store failures: client mistakes are 400, a missing slot is
/// 404, filesystem trouble is 500.
pub fn ssl_error(err: &SslError) -> (StatusCode, Json<Value>) {
    let status = match err {
        SslError::InvalidExtension { .. } => StatusCode::BAD_REQUEST,
        SslError::NotFound { .. } => StatusCode::NOT_FOUND,
        SslError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    err_json(status, &err.to_string())
}
