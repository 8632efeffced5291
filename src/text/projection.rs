//! Text projection
//!
//! The linear projection of a document is the concatenation of its text
//! leaves in document order. Every range-based operation addresses the tree
//! through offsets into this projection, so it is recomputed from the
//! current tree whenever an operation needs it.

use super::range::{StructuralPosition, TextRange};
use crate::models::{ContainerNode, Document, Node, NodePath};

/// Linear projection of the whole document
pub fn project_text(doc: &Document) -> String {
    doc.text_content()
}

/// Length of the projection in the document's offset unit
pub fn text_len(doc: &Document) -> usize {
    let unit = doc.config.offset_unit;
    doc.leaves().iter().map(|(_, leaf)| unit.measure(&leaf.text)).sum()
}

/// Which side of a leaf boundary an offset binds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    /// `offset < leaf_end`: a start position, never inside an empty leaf
    Start,
    /// `offset <= leaf_end`: an end position, may sit at a leaf's end
    End,
}

impl Bias {
    fn selects(self, offset: usize, leaf_end: usize) -> bool {
        match self {
            Bias::Start => offset < leaf_end,
            Bias::End => offset <= leaf_end,
        }
    }
}

/// Map a linear offset to the first leaf that contains it
///
/// Uses the start test (`offset < leaf_end`), so a zero-length leaf is never
/// selected and an offset equal to the projection length resolves to `None`.
pub fn resolve_offset(doc: &Document, offset: usize) -> Option<StructuralPosition> {
    resolve_with_bias(doc, offset, Bias::Start)
}

/// Map a linear end offset to the first leaf whose end is at or after it
pub fn resolve_end_offset(doc: &Document, offset: usize) -> Option<StructuralPosition> {
    resolve_with_bias(doc, offset, Bias::End)
}

pub fn resolve_with_bias(doc: &Document, offset: usize, bias: Bias) -> Option<StructuralPosition> {
    let unit = doc.config.offset_unit;
    let mut current = 0;

    for (path, leaf) in doc.leaves() {
        let leaf_end = current + unit.measure(&leaf.text);
        if bias.selects(offset, leaf_end) {
            return Some(StructuralPosition::new(path, offset - current));
        }
        current = leaf_end;
    }
    None
}

/// A container together with the projection range its text occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpan {
    pub path: NodePath,
    pub range: TextRange,
}

/// Projection ranges of all containers matching `predicate`, in document order
///
/// A container's range starts at the length of the text before it and spans
/// its own flattened text. Empty containers get an empty range.
pub fn element_spans(
    doc: &Document,
    predicate: impl Fn(&ContainerNode) -> bool,
) -> Vec<ElementSpan> {
    let unit = doc.config.offset_unit;
    let mut spans = Vec::new();
    let mut position = 0;

    doc.walk(|path, node| match node {
        Node::Text(leaf) => position += unit.measure(&leaf.text),
        Node::Element(container) => {
            if predicate(container) {
                let len = unit.measure(&container.text_content());
                spans.push(ElementSpan {
                    path: path.clone(),
                    range: TextRange::new(position, position + len),
                });
            }
        }
    });

    spans
}
