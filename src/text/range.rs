//! Linear ranges, structural positions and the range resolver
//!
//! A linear range addresses the projection; a structural range pins the
//! same span to concrete text leaves so it can be extracted from the tree.

use crate::models::{Document, NodePath};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A range of projection offsets, start inclusive, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if this range is empty (start >= end)
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Open-interval overlap test: `self.start < other.end && self.end > other.start`
    ///
    /// Touching ranges (`[3, 6)` and `[6, 9)`) do not intersect.
    pub fn intersects(&self, other: &TextRange) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// A point in the tree: a text leaf and an offset into its text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructuralPosition {
    pub leaf: NodePath,
    pub offset: usize,
}

impl StructuralPosition {
    pub fn new(leaf: NodePath, offset: usize) -> Self {
        Self { leaf, offset }
    }
}

impl PartialOrd for StructuralPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StructuralPosition {
    /// Document order: leaf paths compare lexicographically, then offsets
    fn cmp(&self, other: &Self) -> Ordering {
        self.leaf
            .cmp(&other.leaf)
            .then(self.offset.cmp(&other.offset))
    }
}

/// A pair of structural positions delimiting a span of the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralRange {
    pub start: StructuralPosition,
    pub end: StructuralPosition,
}

impl StructuralRange {
    /// Both ends lie in the same leaf
    pub fn is_single_leaf(&self) -> bool {
        self.start.leaf == self.end.leaf
    }
}

/// Resolve `[start, end)` to a structural range in a single scan over the leaves
///
/// The start binds with the start test (`start < leaf_end`), the end with the
/// end test (`end <= leaf_end`). The scan stops as soon as the end is found,
/// so a range whose end resolves before its start yields `None`, as does any
/// `start > end`.
pub fn resolve_range(doc: &Document, start: usize, end: usize) -> Option<StructuralRange> {
    if start > end {
        return None;
    }

    let unit = doc.config.offset_unit;
    let mut current = 0;
    let mut start_pos = None;
    let mut end_pos = None;

    for (path, leaf) in doc.leaves() {
        let leaf_end = current + unit.measure(&leaf.text);

        if start_pos.is_none() && start < leaf_end {
            start_pos = Some(StructuralPosition::new(path.clone(), start - current));
        }

        if end <= leaf_end {
            end_pos = Some(StructuralPosition::new(path, end - current));
            break;
        }

        current = leaf_end;
    }

    Some(StructuralRange {
        start: start_pos?,
        end: end_pos?,
    })
}
