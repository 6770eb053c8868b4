//! Turns rendered HTML trees into live DOM nodes.

use region_view::html::{self, Fragment, Node};
use region_view::render::LOADING_CLASS;
use wasm_bindgen::JsValue;
use web_sys::{Document, DocumentFragment, Element};

fn build_node(document: &Document, node: &Node) -> Result<web_sys::Node, JsValue> {
    match node {
        Node::Text(text) => Ok(document.create_text_node(text).into()),
        Node::Element(element) => Ok(build_element(document, element)?.into()),
    }
}

fn build_element(document: &Document, element: &html::Element) -> Result<Element, JsValue> {
    let built = document.create_element(element.tag())?;
    for (name, value) in element.attributes() {
        built.set_attribute(name, value)?;
    }
    for child in element.child_nodes() {
        built.append_child(&build_node(document, child)?)?;
    }
    Ok(built)
}

fn build_fragment(document: &Document, nodes: &[Node]) -> Result<DocumentFragment, JsValue> {
    let fragment = document.create_document_fragment();
    for node in nodes {
        fragment.append_child(&build_node(document, node)?)?;
    }
    Ok(fragment)
}

/// Replaces every child of `target` with `fragment`.
pub fn replace_children(target: &Element, fragment: &Fragment) -> Result<(), JsValue> {
    mount(target, fragment.nodes())
}

/// Replaces every child of `target` with a single rendered element.
pub fn replace_with(target: &Element, element: html::Element) -> Result<(), JsValue> {
    mount(target, &[Node::Element(element)])
}

fn mount(target: &Element, nodes: &[Node]) -> Result<(), JsValue> {
    let document = target
        .owner_document()
        .ok_or_else(|| JsValue::from_str("element is not attached to a document"))?;
    let built = build_fragment(&document, nodes)?;
    target.set_text_content(None);
    target.append_child(&built)?;
    Ok(())
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

/// Removes the page's loading indicator if it is still present.
pub fn remove_loading(document: &Document) {
    if let Ok(Some(loading)) = document.query_selector(&format!(".{LOADING_CLASS}")) {
        loading.remove();
    }
}
