//! The text model: a bidirectional mapping between raw `.env` lines and
//! structured entries.
//!
//! Parsing runs as a three-pass pipeline over the physical lines:
//!
//! 1. **Classify** every line independently into a [`LineClass`]
//!    (blank, section banner, comment, setting, or freeform text).
//! 2. **Resolve** for each comment line whether it is consumed as the
//!    description of an upcoming setting.
//! 3. **Fold** the classified sequence into an ordered [`Entry`] list.
//!
//! Serializing is the inverse fold: banners and standalone comments are
//! re-emitted verbatim from their original line, while settings regenerate
//! their `#`-prefix from the enabled flag and their description as `# `
//! comment lines. Description formatting is deliberately lossy: internal
//! comment spacing is normalized to a single `# ` prefix on re-emit.

mod describe;
mod entry;
mod line;
mod parse;
mod serialize;

pub use entry::Entry;
pub use line::{ClassifiedLine, LineClass, classify, classify_lines};
pub use parse::parse;
pub use serialize::serialize;
