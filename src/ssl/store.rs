//! File-backed certificate/key slot store.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// File extensions accepted for uploaded certificate and key material.
const ALLOWED_EXTENSIONS: [&str; 7] = [".pem", ".crt", ".cer", ".der", ".key", ".p12", ".pfx"];

/// Which SSL slot a request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SslKind {
    /// The certificate slot (`cert.*`).
    Cert,
    /// The private key slot (`key.*`).
    Key,
}

impl SslKind {
    /// Parses the `type` query parameter value.
    #[must_use]
    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "cert" => Some(Self::Cert),
            "key" => Some(Self::Key),
            _ => None,
        }
    }

    /// The fixed file stem for this slot.
    #[must_use]
    pub const fn stem(self) -> &'static str {
        match self {
            Self::Cert => "cert",
            Self::Key => "key",
        }
    }

    /// Capitalized name for response messages.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Cert => "Cert",
            Self::Key => "Key",
        }
    }
}

impl fmt::Display for SslKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// Errors from SSL slot operations.
#[derive(Debug, Error)]
pub enum SslError {
    /// The uploaded filename has no extension or one outside the
    /// allow-list.
    #[error(
        "invalid file extension '{extension}'; allowed: .pem, .crt, .cer, .der, .key, .p12, .pfx"
    )]
    InvalidExtension {
        /// The rejected extension (may be empty).
        extension: String,
    },

    /// No file exists in the requested slot.
    #[error("{} file not found", kind.title())]
    NotFound {
        /// The empty slot.
        kind: SslKind,
    },

    /// Filesystem failure while reading, writing, or deleting slot files.
    #[error("ssl file operation on '{}' failed: {source}", path.display())]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Status of one SSL slot, serialized for the status endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SslFileInfo {
    /// File name within the SSL directory.
    pub name: String,

    /// File size in bytes.
    pub size: u64,

    /// Modification time, formatted as `YYYY-MM-DD HH:MM:SS` local time.
    #[serde(rename = "modTime")]
    pub mod_time: String,

    /// Whether the slot holds a file at all.
    pub exists: bool,
}

/// Directory-backed store for the `cert` and `key` slots.
#[derive(Debug, Clone)]
pub struct SslStore {
    dir: PathBuf,
}

impl SslStore {
    /// Creates a store over the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the SSL directory path.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stores uploaded bytes into a slot and returns the destination path.
    ///
    /// The destination name is the slot stem plus the lowercased extension
    /// of `filename`. An existing slot file is copied to `<file>.bak`
    /// first. On unix the stored file is restricted to mode 0600.
    ///
    /// # Errors
    ///
    /// Returns [`SslError::InvalidExtension`] for a missing or disallowed
    /// extension and [`SslError::Io`] for filesystem failures.
    pub fn upload(&self, kind: SslKind, filename: &str, data: &[u8]) -> Result<PathBuf, SslError> {
        let extension = validate_extension(filename)?;
        let dest = self.dir.join(format!("{}{extension}", kind.stem()));

        let map_io = |path: &Path| {
            let path = path.to_path_buf();
            move |source| SslError::Io { path, source }
        };

        std::fs::create_dir_all(&self.dir).map_err(map_io(&self.dir))?;

        // Replacing a slot keeps one backup of the previous material. A
        // re-upload with a different extension removes the old file so the
        // slot never holds two live candidates.
        if let Some(existing) = self.find(kind) {
            let backup = PathBuf::from(format!("{}.bak", existing.display()));
            std::fs::copy(&existing, &backup).map_err(map_io(&backup))?;
            if existing != dest {
                std::fs::remove_file(&existing).map_err(map_io(&existing))?;
            }
        }

        std::fs::write(&dest, data).map_err(map_io(&dest))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&dest, std::fs::Permissions::from_mode(0o600))
                .map_err(map_io(&dest))?;
        }

        Ok(dest)
    }

    /// Deletes the slot file and returns its former path.
    ///
    /// # Errors
    ///
    /// Returns [`SslError::NotFound`] if the slot is empty and
    /// [`SslError::Io`] if the removal fails.
    pub fn delete(&self, kind: SslKind) -> Result<PathBuf, SslError> {
        let path = self.find(kind).ok_or(SslError::NotFound { kind })?;
        std::fs::remove_file(&path).map_err(|source| SslError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Reports the slot's current status.
    ///
    /// A missing file or an unreadable metadata entry both report as
    /// non-existent rather than failing the status request.
    #[must_use]
    pub fn info(&self, kind: SslKind) -> SslFileInfo {
        let Some(path) = self.find(kind) else {
            return SslFileInfo::default();
        };

        let Ok(metadata) = std::fs::metadata(&path) else {
            return SslFileInfo::default();
        };

        let mod_time = metadata
            .modified()
            .map(|time| {
                DateTime::<Local>::from(time)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            })
            .unwrap_or_default();

        SslFileInfo {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            size: metadata.len(),
            mod_time,
            exists: true,
        }
    }

    /// Finds the regular file currently occupying a slot.
    ///
    /// Scans the directory for names starting with the slot stem, skipping
    /// `.bak` backups so a stale backup can never shadow the live file.
    /// Candidates are taken in name order.
    #[must_use]
    pub fn find(&self, kind: SslKind) -> Option<PathBuf> {
        let entries = std::fs::read_dir(&self.dir).ok()?;

        let mut candidates: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| name.starts_with(kind.stem()) && !name.ends_with(".bak"))
            })
            .collect();

        candidates.sort();
        candidates.into_iter().next()
    }

    /// Composes the TLS setting value once both slots are populated.
    ///
    /// Returns `None` while either slot is empty.
    #[must_use]
    pub fn tls_value(&self) -> Option<String> {
        let cert = self.find(SslKind::Cert)?;
        let key = self.find(SslKind::Key)?;
        Some(format!(
            "{{certs=\"{}\",key=\"{}\"}}",
            cert.display(),
            key.display()
        ))
    }
}

/// Validates and returns the lowercased extension (with leading dot) of an
/// uploaded filename.
fn validate_extension(filename: &str) -> Result<String, SslError> {
    let extension = filename
        .rfind('.')
        .map(|dot| filename[dot..].to_ascii_lowercase())
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(SslError::InvalidExtension { extension })
    }
}
