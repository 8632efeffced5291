//! Tag unwrapper
//!
//! Removes formatting containers while keeping their text. Candidates and
//! their projection ranges are snapshotted once, then processed in reverse
//! document order: a container is always handled before its ancestors and
//! before anything to its left, so the snapshotted paths of the remaining
//! candidates stay valid.

use super::normalize::normalize_document;
use crate::models::{ContainerNode, Document, Node, NodePath};
use crate::text::{element_spans, TextRange};
use serde::{Deserialize, Serialize};

/// Outcome of an unwrap pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnwrapReport {
    /// Containers removed
    pub unwrapped: usize,
    /// Candidates that were no longer attached when their turn came
    pub skipped: usize,
}

/// Remove every `tag` container whose range intersects `[start, end)`
///
/// Any overlap qualifies, and the whole container goes, not just the
/// overlapping part: it is replaced in place by a single text leaf holding
/// its flattened text. The document is normalized afterwards.
pub fn unwrap_tag(doc: &mut Document, start: usize, end: usize, tag: &str) -> UnwrapReport {
    let target = TextRange::new(start, end);
    let candidates: Vec<NodePath> = element_spans(doc, |c| c.has_tag(tag))
        .into_iter()
        .filter(|span| span.range.intersects(&target))
        .map(|span| span.path)
        .collect();

    let mut report = UnwrapReport::default();
    for path in candidates.iter().rev() {
        if flatten_at(doc, path, |c| c.has_tag(tag)) {
            report.unwrapped += 1;
        } else {
            log::warn!("unwrap_tag: <{}> at {:?} is no longer attached, skipping", tag, path);
            report.skipped += 1;
        }
    }

    if report.unwrapped > 0 {
        normalize_document(doc);
    }
    log::debug!(
        "unwrap_tag: <{}> over {}..{}: {} unwrapped, {} skipped",
        tag,
        start,
        end,
        report.unwrapped,
        report.skipped
    );
    report
}

/// Replace the matching container at `path` with a text leaf of its content
pub fn flatten_at(
    doc: &mut Document,
    path: &[usize],
    predicate: impl Fn(&ContainerNode) -> bool,
) -> bool {
    let Some((&index, parent_path)) = path.split_last() else {
        return false;
    };
    let Some(parent) = doc.container_at_mut(parent_path) else {
        return false;
    };

    match parent.children.get(index) {
        Some(Node::Element(container)) if predicate(container) => {
            let text = container.text_content();
            parent.children[index] = Node::text(text);
            true
        }
        _ => false,
    }
}

/// Replace the matching container at `path` with its children, spliced into
/// its parent as-is
pub fn splice_children_at(
    doc: &mut Document,
    path: &[usize],
    predicate: impl Fn(&ContainerNode) -> bool,
) -> bool {
    let Some((&index, parent_path)) = path.split_last() else {
        return false;
    };
    let Some(parent) = doc.container_at_mut(parent_path) else {
        return false;
    };

    if !matches!(parent.children.get(index), Some(Node::Element(c)) if predicate(c)) {
        return false;
    }
    let Node::Element(container) = parent.children.remove(index) else {
        return false;
    };
    parent.children.splice(index..index, container.children);
    true
}
