//! Description association: deciding which comment lines belong to which
//! setting.
//!
//! Both decisions are pure functions over the classified line sequence
//! (index in, decision out), so they are testable in isolation from the
//! parse driver.

use super::line::{ClassifiedLine, LineClass};

/// Returns `true` if the comment line at `index` is consumed as the
/// description of a setting that follows it.
///
/// Scans forward from the next line: blank lines are skipped, further
/// comment lines continue the scan (they may belong to the same description
/// block), a setting (enabled or disabled) confirms the association, and a
/// section banner or any other line ends the scan without one.
///
/// The caller must apply this independently to every comment line of a run,
/// not only the first; all of them share the same forward search.
#[must_use]
pub fn feeds_following_setting(lines: &[ClassifiedLine], index: usize) -> bool {
    debug_assert!(matches!(lines[index].class, LineClass::Comment));

    for line in &lines[index + 1..] {
        match line.class {
            LineClass::Blank | LineClass::Comment => {}
            LineClass::Setting { .. } => return true,
            LineClass::Section | LineClass::Other => return false,
        }
    }

    false
}

/// Collects the description for the setting at `index` by walking backward
/// through the immediately preceding comment lines.
///
/// Each comment contributes its text with the single leading `#` and the
/// surrounding whitespace stripped. The walk stops at a blank line, a
/// banner, a commented setting, or any non-comment line. Lines are joined
/// with `\n` in original top-to-bottom order.
///
/// Note the asymmetry with [`feeds_following_setting`]: the forward scan
/// skips blank lines but this backward walk stops at them, so a comment
/// separated from its setting only by blanks is consumed without being
/// captured. This mirrors the historical file format behavior.
#[must_use]
pub fn description_before(lines: &[ClassifiedLine], index: usize) -> String {
    let mut collected = Vec::new();

    for line in lines[..index].iter().rev() {
        if line.class != LineClass::Comment {
            break;
        }

        let trimmed = line.raw.trim();
        let clean = trimmed.strip_prefix('#').unwrap_or(trimmed).trim();
        collected.push(clean);
    }

    collected.reverse();
    collected.join("\n")
}

#[cfg(test)]
#[path = "describe_tests.rs"]
mod tests;
