//! SSL certificate and key file management.
//!
//! Uploaded certificate and key material lives in one directory under the
//! fixed stems `cert` and `key` plus the validated extension of the
//! uploaded file. Once both slots are populated, the composed TLS value
//! can be written into the `.env` file through the core text model.

mod store;

pub use store::{SslError, SslFileInfo, SslKind, SslStore};
