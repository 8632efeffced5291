//! Live DOM bridge
//!
//! Reads the host's editable surface straight from the DOM into the model,
//! and writes the model back as inner markup.

use crate::api::core::{lock_session, with_document};
use crate::converters::to_markup;
use crate::models::{ContainerNode, Document, Node, ROOT_TAG};
use crate::structure::normalize;
use crate::{wasm_info, wasm_log};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Load the document from the children of a live element
#[wasm_bindgen(js_name = loadFromElement)]
pub fn load_from_element(element: &Element) -> Result<(), JsValue> {
    wasm_info!("loadFromElement called: <{}>", element.tag_name().to_ascii_lowercase());

    let mut root = ContainerNode::new(ROOT_TAG);
    root.children = convert_children(element);
    normalize(&mut root);

    let doc = Document::from_root(root);
    wasm_log!("  {} chars of text", doc.text_content().chars().count());
    lock_session()?.install(doc);

    wasm_info!("loadFromElement completed successfully");
    Ok(())
}

/// Replace the element's content with the current document
#[wasm_bindgen(js_name = renderInto)]
pub fn render_into(element: &Element) -> Result<(), JsValue> {
    let markup = with_document(|doc| Ok(to_markup(doc)))?;
    element.set_inner_html(&markup);
    wasm_log!("renderInto: wrote {} bytes", markup.len());
    Ok(())
}

fn convert_children(parent: &web_sys::Node) -> Vec<Node> {
    let list = parent.child_nodes();
    let mut children = Vec::with_capacity(list.length() as usize);

    for i in 0..list.length() {
        let Some(child) = list.item(i) else {
            continue;
        };
        match child.node_type() {
            web_sys::Node::TEXT_NODE => {
                if let Some(text) = child.text_content() {
                    children.push(Node::text(text));
                }
            }
            web_sys::Node::ELEMENT_NODE => {
                if let Some(element) = child.dyn_ref::<Element>() {
                    children.push(Node::Element(convert_element(element)));
                }
            }
            // Comments, CDATA and the like carry no editable text
            _ => {}
        }
    }

    children
}

fn convert_element(element: &Element) -> ContainerNode {
    let mut container = ContainerNode::new(element.tag_name().to_ascii_lowercase());

    for name in element.get_attribute_names().iter() {
        let Some(name) = name.as_string() else {
            continue;
        };
        let Some(value) = element.get_attribute(&name) else {
            continue;
        };
        if name == "class" {
            container.class = Some(value);
        } else {
            container.attrs.insert(name, value);
        }
    }

    container.children = convert_children(element);
    container
}
