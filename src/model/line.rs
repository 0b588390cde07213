//! Line classification: one physical line to one tagged category.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern for a setting line after the optional disabling `#` has been
/// stripped: a name of uppercase letters/digits/underscores, `=`, and the
/// remainder (possibly empty) as the value.
///
/// Compiled once per process.
static SETTING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z0-9_]+)=(.*)$").expect("setting pattern is valid"));

/// Category of a single physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Empty after trimming surrounding whitespace.
    Blank,

    /// Trimmed text starts with `##`: a section banner.
    Section,

    /// Starts with a single `#` but is not a banner and not a commented
    /// setting. May be consumed as a description of a following setting.
    Comment,

    /// A `KEY=VALUE` pair, possibly wrapped in a disabling `#`.
    Setting {
        /// The matched setting name.
        key: String,
        /// Everything after the `=`.
        value: String,
        /// True iff the line had no leading `#`.
        enabled: bool,
    },

    /// Anything else: freeform text without a `#` prefix that is not a
    /// setting. Preserved verbatim as a standalone comment entry, but it
    /// terminates description scans rather than continuing them.
    Other,
}

/// A physical line paired with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// The verbatim source text, untrimmed.
    pub raw: String,

    /// The line's category.
    pub class: LineClass,
}

impl ClassifiedLine {
    /// Returns `true` if the line classifies as a setting.
    #[must_use]
    pub const fn is_setting(&self) -> bool {
        matches!(self.class, LineClass::Setting { .. })
    }
}

/// Classifies one physical line.
#[must_use]
pub fn classify(raw: &str) -> LineClass {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return LineClass::Blank;
    }

    if trimmed.starts_with("##") {
        return LineClass::Section;
    }

    // Strip one optional disabling '#' (and the whitespace after it) to get
    // the clean candidate for the setting pattern.
    let (clean, commented) = match trimmed.strip_prefix('#') {
        Some(rest) => (rest.trim(), true),
        None => (trimmed, false),
    };

    if let Some(captures) = SETTING_RE.captures(clean) {
        return LineClass::Setting {
            key: captures[1].to_string(),
            value: captures[2].to_string(),
            enabled: !commented,
        };
    }

    if commented {
        LineClass::Comment
    } else {
        LineClass::Other
    }
}

/// Splits text into physical lines and classifies each one.
///
/// Splits on `\n`, strips a trailing `\r` per line, and does not produce a
/// phantom empty line for a trailing newline.
#[must_use]
pub fn classify_lines(text: &str) -> Vec<ClassifiedLine> {
    text.lines()
        .map(|raw| ClassifiedLine {
            raw: raw.to_string(),
            class: classify(raw),
        })
        .collect()
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
