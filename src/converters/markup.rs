//! Markup conversion
//!
//! Converts between the document tree and an XHTML-style fragment, the form
//! in which the editable surface hands its content over. Parsing uses
//! roxmltree, so the fragment must be well-formed (closed tags, quoted
//! attributes, only the predefined XML entities).

use crate::error::{EditError, EditOutcome};
use crate::models::{ContainerNode, Document, Node, ROOT_TAG};
use roxmltree::Document as XmlDocument;

/// Parse a markup fragment into a document whose root holds its nodes
///
/// # Example
///
/// ```
/// use richtext_wasm::converters::markup::parse_markup;
///
/// let doc = parse_markup("abc<b>def</b>ghi").unwrap();
/// assert_eq!(doc.text_content(), "abcdefghi");
/// ```
pub fn parse_markup(markup: &str) -> EditOutcome<Document> {
    let wrapped = format!("<{0}>{1}</{0}>", ROOT_TAG, markup);
    let xml = XmlDocument::parse(&wrapped).map_err(|e| EditError::InvalidMarkup(e.to_string()))?;

    let mut root = ContainerNode::new(ROOT_TAG);
    root.children = convert_children(xml.root_element());
    Ok(Document::from_root(root))
}

fn convert_children(parent: roxmltree::Node) -> Vec<Node> {
    parent
        .children()
        .filter_map(|child| {
            if child.is_text() {
                child.text().map(|text| Node::text(text))
            } else if child.is_element() {
                Some(Node::Element(convert_element(child)))
            } else {
                // Comments and processing instructions carry no content
                None
            }
        })
        .collect()
}

fn convert_element(element: roxmltree::Node) -> ContainerNode {
    let mut container = ContainerNode::new(element.tag_name().name());
    for attr in element.attributes() {
        if attr.name() == "class" {
            container.class = Some(attr.value().to_string());
        } else {
            container
                .attrs
                .insert(attr.name().to_string(), attr.value().to_string());
        }
    }
    container.children = convert_children(element);
    container
}

/// Serialize the root's children back to markup
pub fn to_markup(doc: &Document) -> String {
    let mut out = String::new();
    for child in &doc.root.children {
        write_node(child, &mut out);
    }
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(leaf) => out.push_str(&escape_text(&leaf.text)),
        Node::Element(container) => {
            out.push('<');
            out.push_str(&container.tag);
            if let Some(class) = &container.class {
                out.push_str(&format!(" class=\"{}\"", escape_attr(class)));
            }
            for (name, value) in &container.attrs {
                out.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
            }
            out.push('>');
            for child in &container.children {
                write_node(child, out);
            }
            out.push_str(&format!("</{}>", container.tag));
        }
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Escape special XML characters for an attribute value
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
