//! Structural mutator: wrap a linear range in a new container
//!
//! The range is resolved to two leaf positions, everything between them is
//! lifted out of the tree with its structure intact (containers that are
//! only partly inside the range are split, one half staying behind and a
//! shallow copy carrying the other half), and the lifted content is
//! reinserted under the new container at the vacated spot.

use super::normalize::remove_empty_children;
use crate::error::{validate_class_name, validate_tag_name, EditError, EditOutcome};
use crate::models::{ContainerNode, Document, Node, OffsetUnit};
use crate::text::{project_text, resolve_range, text_len, StructuralRange, TextRange};

/// Wrap `[start, end)` in the container produced by `make_container`
///
/// Fails with [`EditError::RangeUnresolved`] and leaves the tree untouched
/// when the range cannot be anchored. Offsets that split a character (half
/// of a surrogate pair) move inward to the nearest character boundary; a
/// range left covering no whole character changes nothing.
pub fn wrap_range(
    doc: &mut Document,
    start: usize,
    end: usize,
    make_container: impl FnOnce() -> ContainerNode,
) -> EditOutcome {
    let unit = doc.config.offset_unit;
    let len = text_len(doc);
    if start > end || end > len {
        return Err(EditError::RangeUnresolved { start, end, len });
    }

    // Offsets inside a character shrink the range to whole characters
    let text = project_text(doc);
    let snapped = TextRange::new(unit.ceil_offset(&text, start), unit.floor_offset(&text, end));
    if snapped.is_empty() {
        log::trace!("wrap_range: {}..{} covers no whole character, nothing to wrap", start, end);
        return Ok(());
    }

    let range = resolve_range(doc, snapped.start, snapped.end)
        .ok_or(EditError::RangeUnresolved { start, end, len })?;

    let cleanup = doc.config.cleanup;

    let Some(extraction) = extract(doc, &range, unit) else {
        return Err(EditError::RangeUnresolved { start, end, len });
    };

    let mut wrapper = make_container();
    wrapper.children.extend(extraction.fragment);
    let removed = remove_empty_children(&mut wrapper, cleanup);
    log::debug!(
        "wrap_range: <{}> around {}..{} ({} children, {} empty removed)",
        wrapper.tag,
        start,
        end,
        wrapper.children.len(),
        removed
    );

    if let Some(parent) = doc.container_at_mut(&extraction.parent) {
        parent.children.insert(extraction.index, Node::Element(wrapper));
    }
    Ok(())
}

/// Wrap `[start, end)` in a new `<tag>` element
pub fn format_range(doc: &mut Document, start: usize, end: usize, tag: &str) -> EditOutcome {
    validate_tag_name(tag)?;
    wrap_range(doc, start, end, || ContainerNode::new(tag))
}

/// Wrap `[start, end)` in a new `<tag class="class">` element
pub fn mark_range(
    doc: &mut Document,
    start: usize,
    end: usize,
    tag: &str,
    class: &str,
) -> EditOutcome {
    validate_tag_name(tag)?;
    validate_class_name(class)?;
    wrap_range(doc, start, end, || ContainerNode::with_class(tag, class))
}

/// Content lifted out of the tree and where it came from
struct Extraction {
    /// Path of the container that receives the wrapper
    parent: Vec<usize>,
    /// Child index the wrapper is inserted at
    index: usize,
    fragment: Vec<Node>,
}

fn extract(doc: &mut Document, range: &StructuralRange, unit: OffsetUnit) -> Option<Extraction> {
    if range.is_single_leaf() {
        return extract_from_leaf(doc, range, unit);
    }

    let start = &range.start.leaf;
    let end = &range.end.leaf;

    // Leaves are never ancestors of one another, so the paths diverge
    // strictly before either of them ends.
    let depth = start.iter().zip(end.iter()).take_while(|(a, b)| a == b).count();
    let (first, last) = (*start.get(depth)?, *end.get(depth)?);
    if first >= last {
        return None;
    }

    let ancestor_path = start[..depth].to_vec();
    let ancestor = doc.container_at_mut(&ancestor_path)?;

    let mut before = std::mem::take(&mut ancestor.children);
    if last >= before.len() {
        ancestor.children = before;
        return None;
    }
    let mut after = before.split_off(last + 1);
    let last_node = before.pop()?;
    let mut middle = before.split_off(first + 1);
    let first_node = before.pop()?;

    let (left_keep, left_taken) =
        split_node(first_node, &start[depth + 1..], range.start.offset, unit);
    let (right_taken, right_keep) =
        split_node(last_node, &end[depth + 1..], range.end.offset, unit);

    let mut fragment = Vec::with_capacity(middle.len() + 2);
    fragment.extend(left_taken);
    fragment.append(&mut middle);
    fragment.extend(right_taken);

    let mut children = before;
    children.extend(left_keep);
    let index = children.len();
    children.extend(right_keep);
    children.append(&mut after);
    ancestor.children = children;

    Some(Extraction {
        parent: ancestor_path,
        index,
        fragment,
    })
}

fn extract_from_leaf(
    doc: &mut Document,
    range: &StructuralRange,
    unit: OffsetUnit,
) -> Option<Extraction> {
    let (&leaf_index, parent_path) = range.start.leaf.split_last()?;
    let parent = doc.container_at_mut(parent_path)?;
    let Node::Text(leaf) = parent.children.get(leaf_index)? else {
        return None;
    };

    let text = &leaf.text;
    let start_byte = unit.byte_index(text, range.start.offset);
    let end_byte = unit.byte_index(text, range.end.offset).max(start_byte);

    let before = &text[..start_byte];
    let middle = text[start_byte..end_byte].to_string();
    let after = &text[end_byte..];

    let mut replacement = Vec::with_capacity(2);
    if !before.is_empty() {
        replacement.push(Node::text(before));
    }
    let index = leaf_index + replacement.len();
    if !after.is_empty() {
        replacement.push(Node::text(after));
    }

    parent.children.splice(leaf_index..=leaf_index, replacement);

    Some(Extraction {
        parent: parent_path.to_vec(),
        index,
        fragment: vec![Node::text(middle)],
    })
}

/// Split `node` at a leaf position below it into the parts before and after
///
/// `path` is relative to `node`. A text leaf splits its string; a container
/// splits its children and becomes two shallow copies. Halves with no content
/// are dropped.
fn split_node(
    node: Node,
    path: &[usize],
    offset: usize,
    unit: OffsetUnit,
) -> (Option<Node>, Option<Node>) {
    match node {
        Node::Text(leaf) => {
            let (left, right) = unit.split_at(&leaf.text, offset);
            (non_empty_text(left), non_empty_text(right))
        }
        Node::Element(mut container) => {
            let Some((&index, rest)) = path.split_first() else {
                return (Some(Node::Element(container)), None);
            };
            if index >= container.children.len() {
                return (Some(Node::Element(container)), None);
            }

            let mut left = std::mem::take(&mut container.children);
            let mut right = left.split_off(index);
            let child = right.remove(0);

            let (child_left, child_right) = split_node(child, rest, offset, unit);
            left.extend(child_left);
            if let Some(node) = child_right {
                right.insert(0, node);
            }

            (
                non_empty_container(&container, left),
                non_empty_container(&container, right),
            )
        }
    }
}

fn non_empty_text(text: &str) -> Option<Node> {
    (!text.is_empty()).then(|| Node::text(text))
}

fn non_empty_container(template: &ContainerNode, children: Vec<Node>) -> Option<Node> {
    if children.is_empty() {
        return None;
    }
    let mut copy = template.shallow_clone();
    copy.children = children;
    Some(Node::Element(copy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::markup::to_markup;
    use crate::models::{CleanupDepth, EditorConfig};

    fn abc_def_ghi() -> Document {
        Document::from_children(vec![
            Node::text("abc"),
            Node::element("b", vec![Node::text("def")]),
            Node::text("ghi"),
        ])
    }

    #[test]
    fn test_wrap_inside_single_leaf() {
        let mut doc = Document::from_text("hello world");
        format_range(&mut doc, 6, 11, "b").unwrap();

        assert_eq!(to_markup(&doc), "hello <b>world</b>");
        assert_eq!(project_text(&doc), "hello world");
    }

    #[test]
    fn test_wrap_whole_leaf_leaves_no_empty_text() {
        let mut doc = Document::from_text("abc");
        format_range(&mut doc, 0, 3, "i").unwrap();

        assert_eq!(doc.root.children, vec![Node::element("i", vec![Node::text("abc")])]);
    }

    #[test]
    fn test_wrap_across_container_boundary_splits_it() {
        let mut doc = abc_def_ghi();
        format_range(&mut doc, 1, 4, "i").unwrap();

        assert_eq!(to_markup(&doc), "a<i>bc<b>d</b></i><b>ef</b>ghi");
        assert_eq!(project_text(&doc), "abcdefghi");
    }

    #[test]
    fn test_wrap_enclosing_whole_container() {
        let mut doc = abc_def_ghi();
        format_range(&mut doc, 2, 7, "u").unwrap();

        assert_eq!(to_markup(&doc), "ab<u>c<b>def</b>g</u>hi");
    }

    #[test]
    fn test_wrap_inside_container_anchors_there() {
        let mut doc = abc_def_ghi();
        format_range(&mut doc, 3, 6, "i").unwrap();

        // Start binds to the leaf after the boundary, end to the leaf before it
        assert_eq!(to_markup(&doc), "abc<b><i>def</i></b>ghi");
    }

    #[test]
    fn test_wrap_start_of_container_drops_empty_shell() {
        let mut doc = Document::from_children(vec![
            Node::element("b", vec![Node::text("cd")]),
            Node::text("ef"),
        ]);
        format_range(&mut doc, 0, 3, "span").unwrap();

        assert_eq!(to_markup(&doc), "<span><b>cd</b>e</span>f");
    }

    #[test]
    fn test_wrap_removes_empty_direct_children() {
        let mut doc = Document::from_children(vec![
            Node::text("ab"),
            Node::element("br", vec![]),
            Node::element("i", vec![Node::element("u", vec![])]),
            Node::text("cd"),
        ]);
        format_range(&mut doc, 1, 3, "b").unwrap();

        // Only the wrapper's direct children are swept
        assert_eq!(to_markup(&doc), "a<b>b<i><u></u></i>c</b>d");
    }

    #[test]
    fn test_wrap_recursive_cleanup() {
        let config = EditorConfig {
            cleanup: CleanupDepth::Recursive,
            ..EditorConfig::default()
        };
        let mut doc = Document::from_children(vec![
            Node::text("ab"),
            Node::element("i", vec![Node::element("u", vec![])]),
            Node::text("cd"),
        ])
        .with_config(config);
        format_range(&mut doc, 1, 3, "b").unwrap();

        assert_eq!(to_markup(&doc), "a<b>bc</b>d");
    }

    #[test]
    fn test_wrap_zero_width_is_noop() {
        for k in 0..=9 {
            let mut doc = abc_def_ghi();
            let before = doc.clone();
            let _ = format_range(&mut doc, k, k, "b");
            assert_eq!(doc, before, "zero-width wrap at {} changed the tree", k);
        }
    }

    #[test]
    fn test_wrap_collapsed_at_leaf_boundary() {
        let mut doc = abc_def_ghi();
        assert_eq!(format_range(&mut doc, 3, 3, "b"), Ok(()));
        assert_eq!(format_range(&mut doc, 9, 9, "b"), Ok(()));
        assert!(format_range(&mut doc, 10, 10, "b").is_err());
        assert_eq!(doc, abc_def_ghi());
    }

    #[test]
    fn test_wrap_shrinks_to_whole_characters() {
        let mut doc = Document::from_text("a😀b");
        format_range(&mut doc, 1, 2, "b").unwrap();
        assert_eq!(doc, Document::from_text("a😀b"));

        format_range(&mut doc, 2, 4, "b").unwrap();
        assert_eq!(to_markup(&doc), "a😀<b>b</b>");
    }

    #[test]
    fn test_wrap_unresolvable_range() {
        let mut doc = abc_def_ghi();
        let before = doc.clone();

        let err = format_range(&mut doc, 5, 20, "b").unwrap_err();
        assert_eq!(err, EditError::RangeUnresolved { start: 5, end: 20, len: 9 });
        assert_eq!(doc, before);

        assert!(format_range(&mut doc, 6, 2, "b").is_err());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_wrap_rejects_bad_tag() {
        let mut doc = abc_def_ghi();
        assert_eq!(
            format_range(&mut doc, 0, 2, "not a tag"),
            Err(EditError::InvalidTagName("not a tag".to_string()))
        );
    }

    #[test]
    fn test_mark_range_sets_class() {
        let mut doc = Document::from_text("the cat");
        mark_range(&mut doc, 4, 7, "span", "hl").unwrap();
        assert_eq!(to_markup(&doc), r#"the <span class="hl">cat</span>"#);
    }

    #[test]
    fn test_wrap_deeply_nested_split() {
        // <p><b>ab<i>cd</i></b>ef</p>
        let mut doc = Document::from_children(vec![Node::element(
            "p",
            vec![
                Node::element(
                    "b",
                    vec![Node::text("ab"), Node::element("i", vec![Node::text("cd")])],
                ),
                Node::text("ef"),
            ],
        )]);
        format_range(&mut doc, 3, 5, "u").unwrap();

        assert_eq!(
            to_markup(&doc),
            "<p><b>ab<i>c</i></b><u><b><i>d</i></b>e</u>f</p>"
        );
        assert_eq!(project_text(&doc), "abcdef");
    }
}
