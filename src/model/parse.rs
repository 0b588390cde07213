//! The parse driver: classified lines folded into the entry list.

use super::describe::{description_before, feeds_following_setting};
use super::entry::Entry;
use super::line::{LineClass, classify_lines};

/// Parses `.env` text into an ordered list of [`Entry`] records.
///
/// Each meaningful unit of the file (banner, standalone comment/blank, or
/// setting with its harvested description) yields exactly one entry, in
/// file order. Comment lines that resolve as the description of an upcoming
/// setting are not emitted standalone; they surface through that setting's
/// `description` field instead.
///
/// Entries are built fresh on every call; nothing is cached.
#[must_use]
pub fn parse(text: &str) -> Vec<Entry> {
    let lines = classify_lines(text);
    let mut entries = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        match &line.class {
            LineClass::Blank | LineClass::Other => {
                entries.push(Entry::comment(line.raw.clone()));
            }
            LineClass::Section => {
                entries.push(Entry::section(line.raw.clone()));
            }
            LineClass::Setting {
                key,
                value,
                enabled,
            } => {
                let description = description_before(&lines, index);
                entries.push(Entry::setting(
                    key.clone(),
                    value.clone(),
                    *enabled,
                    description,
                    line.raw.clone(),
                ));
            }
            LineClass::Comment => {
                if !feeds_following_setting(&lines, index) {
                    entries.push(Entry::comment(line.raw.clone()));
                }
            }
        }
    }

    entries
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
