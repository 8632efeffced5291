//! Literal substring search over the linear projection
//!
//! The needle is escaped before it is compiled, so every character matches
//! itself and no input can produce a pattern error. Matches are found left
//! to right without overlap and reported in the document's offset unit.

pub mod highlight;

pub use highlight::{clear_highlights, highlight_occurrences, HighlightReport, HIGHLIGHT_TAG};

use crate::models::{Document, OffsetUnit};
use crate::text::{project_text, TextRange};
use regex::Regex;

/// All non-overlapping occurrences of `needle` in the document's projection
pub fn find_occurrences(doc: &Document, needle: &str) -> Vec<TextRange> {
    let text = project_text(doc);
    find_in_text(&text, needle, doc.config.offset_unit)
}

/// All non-overlapping occurrences of `needle` in `text`, measured in `unit`
pub fn find_in_text(text: &str, needle: &str, unit: OffsetUnit) -> Vec<TextRange> {
    if needle.is_empty() {
        return Vec::new();
    }

    let pattern = match Regex::new(&regex::escape(needle)) {
        Ok(pattern) => pattern,
        Err(e) => {
            log::warn!("find_occurrences: cannot compile search for {:?}: {}", needle, e);
            return Vec::new();
        }
    };

    let mut occurrences = Vec::new();
    let mut last_byte = 0;
    let mut last_offset = 0;

    for m in pattern.find_iter(text) {
        let start = last_offset + unit.measure(&text[last_byte..m.start()]);
        let end = start + unit.measure(m.as_str());
        occurrences.push(TextRange::new(start, end));
        last_byte = m.end();
        last_offset = end;
    }

    log::trace!("find_occurrences: {:?} found {} times", needle, occurrences.len());
    occurrences
}
