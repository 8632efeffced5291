//! Tree normalization
//!
//! - Adjacent text leaves merge into one and empty leaves disappear, which
//!   keeps leaf boundaries stable for the next offset resolution.
//! - Empty containers under a freshly created wrapper are swept away.

use crate::models::{CleanupDepth, ContainerNode, Document, Node};

/// Merge adjacent text leaves and drop empty ones, at every depth
pub fn normalize(container: &mut ContainerNode) {
    let children = std::mem::take(&mut container.children);
    let mut normalized: Vec<Node> = Vec::with_capacity(children.len());

    for child in children {
        match child {
            Node::Text(leaf) => {
                if leaf.is_empty() {
                    continue;
                }
                match normalized.last_mut() {
                    Some(Node::Text(prev)) => prev.text.push_str(&leaf.text),
                    _ => normalized.push(Node::Text(leaf)),
                }
            }
            Node::Element(mut inner) => {
                normalize(&mut inner);
                normalized.push(Node::Element(inner));
            }
        }
    }

    container.children = normalized;
}

/// Normalize everything below the document root
pub fn normalize_document(doc: &mut Document) {
    normalize(&mut doc.root);
}

/// Remove child containers that have no children; returns how many went
///
/// With [`CleanupDepth::Shallow`] only the direct children of `container` are
/// checked. [`CleanupDepth::Recursive`] sweeps bottom-up, so a container
/// left empty by the removal of its own children goes too.
pub fn remove_empty_children(container: &mut ContainerNode, depth: CleanupDepth) -> usize {
    let mut removed = 0;

    if depth == CleanupDepth::Recursive {
        for child in container.children.iter_mut() {
            if let Node::Element(inner) = child {
                removed += remove_empty_children(inner, depth);
            }
        }
    }

    let before = container.children.len();
    container
        .children
        .retain(|child| !matches!(child, Node::Element(inner) if inner.is_empty()));
    removed + (before - container.children.len())
}
