//! The structured representation of one logical unit of an `.env` file.

use serde::{Deserialize, Serialize};

/// One logical unit of the file: a setting, a section banner, or a
/// standalone comment/blank line.
///
/// Exactly one of the following holds per entry:
/// - it is a setting (`key` is non-empty),
/// - it is a section banner (`is_section`),
/// - it is a standalone comment or blank line (`is_comment`).
///
/// Entries are exchanged with the editing surface as JSON with camelCase
/// field names (`isComment`, `originalLine`, ...). All fields default so a
/// client may omit whatever does not apply to the entry kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entry {
    /// Setting name: uppercase letters, digits, and underscores.
    /// Empty for non-setting entries.
    pub key: String,

    /// Raw text after the `=`. Empty for non-setting entries.
    pub value: String,

    /// Whether the setting line carries no disabling `#` prefix.
    /// Meaningful only for settings.
    pub enabled: bool,

    /// Newline-joined descriptive text harvested from comment lines
    /// immediately preceding the setting. Empty if none.
    pub description: String,

    /// True for a standalone comment or blank line that was not consumed
    /// as a description and is not a banner.
    pub is_comment: bool,

    /// True for a `##`-prefixed section banner line.
    pub is_section: bool,

    /// The verbatim source line, used to losslessly re-emit banners and
    /// standalone comments/blanks.
    pub original_line: String,
}

impl Entry {
    /// Creates a setting entry.
    #[must_use]
    pub fn setting(
        key: impl Into<String>,
        value: impl Into<String>,
        enabled: bool,
        description: impl Into<String>,
        original_line: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled,
            description: description.into(),
            original_line: original_line.into(),
            ..Self::default()
        }
    }

    /// Creates a standalone comment entry (also models blank lines, whose
    /// `original_line` is the raw whitespace-only text).
    #[must_use]
    pub fn comment(original_line: impl Into<String>) -> Self {
        Self {
            is_comment: true,
            original_line: original_line.into(),
            ..Self::default()
        }
    }

    /// Creates a section banner entry.
    #[must_use]
    pub fn section(original_line: impl Into<String>) -> Self {
        Self {
            is_section: true,
            original_line: original_line.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if this entry represents a setting.
    #[must_use]
    pub fn is_setting(&self) -> bool {
        !self.key.is_empty()
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
