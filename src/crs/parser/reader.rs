//! Code reader
//!
//! Reads a single realm code at a cursor: one uppercase ASCII letter, then one lowercase
//! ASCII letter if present. Anything else is "no match" and leaves the cursor alone.

use super::ParserState;
use crate::crs::graph::RealmCode;

/// Read the code starting at byte offset `cursor`.
///
/// Returns the code and the offset just past it.
pub fn read_code(source: &str, cursor: usize) -> Option<(RealmCode, usize)> {
    let bytes = source.as_bytes();
    let lead = *bytes.get(cursor)?;
    if !lead.is_ascii_uppercase() {
        return None;
    }

    let mut end = cursor + 1;
    if bytes.get(end).is_some_and(|b| b.is_ascii_lowercase()) {
        end += 1;
    }

    Some((RealmCode::from_validated(&source[cursor..end]), end))
}

impl ParserState<'_> {
    /// Read a code at the cursor, advancing past it on success
    pub(crate) fn read_code(&mut self) -> Option<RealmCode> {
        let (code, end) = read_code(self.source(), self.cursor())?;
        self.advance_to(end);
        Some(code)
    }
}
