//! Format query: does any `tag` container overlap a range?
//!
//! Read-only counterpart of the unwrapper, used by the host to report
//! toolbar state ("is this selection bold?").

use crate::models::Document;
use crate::text::{element_spans, TextRange};

/// True if some `tag` container's range intersects `[start, end)`
///
/// Uses the same open-interval test as [`unwrap_tag`](super::unwrap::unwrap_tag),
/// so a collapsed cursor strictly inside a container reports it.
pub fn has_format_in_range(doc: &Document, start: usize, end: usize, tag: &str) -> bool {
    let target = TextRange::new(start, end);
    element_spans(doc, |c| c.has_tag(tag))
        .iter()
        .any(|span| span.range.intersects(&target))
}

/// Tags of all containers whose range intersects `[start, end)`, outermost first
pub fn formats_in_range(doc: &Document, start: usize, end: usize) -> Vec<String> {
    let target = TextRange::new(start, end);
    let mut tags: Vec<String> = Vec::new();

    for span in element_spans(doc, |_| true) {
        if !span.range.intersects(&target) {
            continue;
        }
        if let Some(container) = doc.node_at(&span.path).and_then(|n| n.as_element()) {
            let tag = container.tag.to_ascii_lowercase();
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}
