//! Highlight manager
//!
//! Search hits are marked by wrapping them in `<span class="...">` markers.
//! The marker class is the only state, and it lives in the tree: clearing
//! finds the markers again by class.

use super::find_occurrences;
use crate::error::{validate_class_name, EditOutcome};
use crate::models::Document;
use crate::structure::{mark_range, normalize_document, splice_children_at};
use serde::{Deserialize, Serialize};

/// Tag used for highlight markers
pub const HIGHLIGHT_TAG: &str = "span";

/// Outcome of a highlight pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightReport {
    /// Markers removed before searching
    pub cleared: usize,
    /// Occurrences wrapped in a new marker
    pub applied: usize,
    /// Occurrences that could not be anchored
    pub skipped: usize,
}

/// Remove every container carrying `class`, keeping its children in place
///
/// Markers are spliced out in reverse document order, so nested markers are
/// handled before their ancestors and earlier paths stay valid. Adjacent
/// text leaves are merged afterwards.
pub fn clear_highlights(doc: &mut Document, class: &str) -> usize {
    let markers = doc.elements_by_class(class);
    let mut removed = 0;

    for path in markers.iter().rev() {
        if splice_children_at(doc, path, |c| c.has_class(class)) {
            removed += 1;
        }
    }

    normalize_document(doc);
    log::debug!("clear_highlights: removed {} .{} markers", removed, class);
    removed
}

/// Clear old markers, then mark every occurrence of `needle` with `class`
///
/// Occurrences are wrapped right to left. Wrapping never changes the
/// projection, and going right to left keeps each new marker clear of the
/// leaves the next (leftward) resolution anchors to.
pub fn highlight_occurrences(
    doc: &mut Document,
    needle: &str,
    class: &str,
) -> EditOutcome<HighlightReport> {
    validate_class_name(class)?;

    let mut report = HighlightReport {
        cleared: clear_highlights(doc, class),
        ..HighlightReport::default()
    };

    let occurrences = find_occurrences(doc, needle);
    for occurrence in occurrences.iter().rev() {
        match mark_range(doc, occurrence.start, occurrence.end, HIGHLIGHT_TAG, class) {
            Ok(()) => report.applied += 1,
            Err(e) => {
                log::warn!("highlight_occurrences: skipping {:?}: {}", occurrence, e);
                report.skipped += 1;
            }
        }
    }

    log::debug!(
        "highlight_occurrences: {:?} -> {} marked, {} skipped, {} cleared",
        needle,
        report.applied,
        report.skipped,
        report.cleared
    );
    Ok(report)
}
