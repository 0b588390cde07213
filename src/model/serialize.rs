//! The serializer: entry list back to file text.

use super::entry::Entry;

/// Reconstructs file text from an ordered entry list.
///
/// A pure function of its input: banners and standalone comments (including
/// blank lines) re-emit their `original_line` verbatim, while settings are
/// regenerated from their fields. A non-empty description emits one `# `
/// comment line per contained line above the setting, and the `enabled`
/// flag decides between `KEY=VALUE` and `# KEY=VALUE`. No entry is ever
/// dropped or reordered.
#[must_use]
pub fn serialize(entries: &[Entry]) -> String {
    let mut out = String::new();

    for entry in entries {
        if entry.is_section || (entry.key.is_empty() && entry.is_comment) {
            out.push_str(&entry.original_line);
            out.push('\n');
            continue;
        }

        if !entry.description.is_empty() {
            for line in entry.description.split('\n') {
                out.push_str("# ");
                out.push_str(line);
                out.push('\n');
            }
        }

        if !entry.enabled {
            out.push_str("# ");
        }
        out.push_str(&entry.key);
        out.push('=');
        out.push_str(&entry.value);
        out.push('\n');
    }

    out
}

#[cfg(test)]
#[path = "serialize_tests.rs"]
mod tests;
