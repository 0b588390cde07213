//! The `.env` file source and sink.
//!
//! Reads prefer the primary file and fall back to a template; writes back
//! up the previous contents and replace the file atomically (temp file,
//! then rename). Every read re-parses from disk; nothing is cached across
//! requests. Concurrent writers are not coordinated here: the last write
//! wins, which is an accepted limitation of the single-user deployment.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::{self, Entry};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// Errors from `.env` file operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Neither the primary file nor the template exists.
    #[error("neither '{}' nor template '{}' exists", env.display(), template.display())]
    NotFound {
        /// Primary env file path.
        env: PathBuf,
        /// Fallback template path.
        template: PathBuf,
    },

    /// Failed to read a source file.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the env file.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the pre-write backup copy.
    #[error("failed to back up '{}': {source}", path.display())]
    Backup {
        /// Path of the backup destination.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Text loaded from disk together with the path it came from.
#[derive(Debug, Clone)]
pub struct LoadedEnv {
    /// The file's UTF-8 contents.
    pub text: String,

    /// The path actually read (primary file or template).
    pub path: PathBuf,
}

/// File-backed store for one `.env` file with a read-only template
/// fallback.
#[derive(Debug, Clone)]
pub struct EnvStore {
    env_path: PathBuf,
    template_path: PathBuf,
}

impl EnvStore {
    /// Creates a store over the given primary and template paths.
    #[must_use]
    pub fn new(env_path: impl Into<PathBuf>, template_path: impl Into<PathBuf>) -> Self {
        Self {
            env_path: env_path.into(),
            template_path: template_path.into(),
        }
    }

    /// Returns the primary env file path.
    #[must_use]
    pub fn env_path(&self) -> &Path {
        &self.env_path
    }

    /// Loads the current configuration text, preferring the primary file
    /// and falling back to the template.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if neither file exists, or
    /// [`StoreError::Read`] on any other read failure.
    pub fn load(&self) -> Result<LoadedEnv, StoreError> {
        match read_optional(&self.env_path)? {
            Some(text) => Ok(LoadedEnv {
                text,
                path: self.env_path.clone(),
            }),
            None => match read_optional(&self.template_path)? {
                Some(text) => Ok(LoadedEnv {
                    text,
                    path: self.template_path.clone(),
                }),
                None => Err(StoreError::NotFound {
                    env: self.env_path.clone(),
                    template: self.template_path.clone(),
                }),
            },
        }
    }

    /// Writes new configuration text to the primary path.
    ///
    /// If the primary file already exists its current contents are copied
    /// to `<path>.bak` first. The write itself goes to a temp file that is
    /// renamed into place, so the destination is either fully replaced or
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backup`] if the backup copy fails and
    /// [`StoreError::Write`] if the write itself fails.
    pub fn save(&self, text: &str) -> Result<(), StoreError> {
        if self.env_path.exists() {
            let backup_path = PathBuf::from(format!("{}.bak", self.env_path.display()));
            std::fs::copy(&self.env_path, &backup_path).map_err(|source| StoreError::Backup {
                path: backup_path,
                source,
            })?;
        }

        self.write_atomic(text)
    }

    /// Sets one setting's value, preserving its enabled/disabled toggle.
    ///
    /// Loads the current text (with template fallback), parses it, replaces
    /// the value of every setting entry named `key`, and appends the
    /// setting in the disabled state if it was absent. The result is
    /// written to the primary path without a backup.
    ///
    /// # Errors
    ///
    /// Propagates load and write failures.
    pub fn update_setting(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let loaded = self.load()?;
        let mut entries = model::parse(&loaded.text);

        let mut found = false;
        for entry in entries.iter_mut().filter(|e| e.key == key) {
            entry.value = value.to_string();
            found = true;
        }

        if !found {
            entries.push(Entry::setting(key, value, false, "", ""));
        }

        self.write_atomic(&model::serialize(&entries))
    }

    fn write_atomic(&self, text: &str) -> Result<(), StoreError> {
        let map_write = |source| StoreError::Write {
            path: self.env_path.clone(),
            source,
        };

        if let Some(parent) = self.env_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(map_write)?;
        }

        // Append .tmp instead of replacing the extension so ".env" stays
        // distinct from its sibling files.
        let temp_path = PathBuf::from(format!("{}.tmp", self.env_path.display()));
        std::fs::write(&temp_path, text).map_err(map_write)?;
        std::fs::rename(&temp_path, &self.env_path).map_err(map_write)?;

        Ok(())
    }
}

/// Reads a file, mapping a missing file to `None`.
fn read_optional(path: &Path) -> Result<Option<String>, StoreError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StoreError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
