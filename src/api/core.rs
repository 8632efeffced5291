//! Document session for the JavaScript host
//!
//! The module owns one document at a time, the model of the host's editable
//! surface. The host loads it (from markup, a serialized tree, or a live DOM
//! element), runs edit commands against it, and reads the result back.
//! Commands are serialized by the session lock; the engine itself keeps no
//! state between calls.

use crate::api::helpers::{edit_error, from_js, to_js};
use crate::converters::{parse_markup, to_markup};
use crate::error::EditError;
use crate::models::{Document, EditorConfig};
use crate::text::{project_text, text_len};
use crate::{wasm_error, wasm_info, wasm_warn};
use lazy_static::lazy_static;
use std::sync::{Mutex, MutexGuard};
use wasm_bindgen::prelude::*;

/// WASM-owned editing state
#[derive(Debug, Default)]
pub struct Session {
    pub document: Option<Document>,
    /// Applied to every document loaded after `configure`
    pub config: EditorConfig,
}

impl Session {
    /// Install a document, stamping it with the session config
    pub fn install(&mut self, mut doc: Document) {
        doc.config = self.config.clone();
        self.document = Some(doc);
    }
}

// WASM-owned document storage (canonical source of truth)
lazy_static! {
    static ref SESSION: Mutex<Session> = Mutex::new(Session::default());
}

/// Lock the session, turning a poisoned lock into a JS error
pub fn lock_session() -> Result<MutexGuard<'static, Session>, JsValue> {
    SESSION.lock().map_err(|e| {
        wasm_error!("Session lock poisoned: {}", e);
        JsValue::from_str("Session lock poisoned")
    })
}

/// Run `f` against the loaded document
pub fn with_document<T>(
    f: impl FnOnce(&mut Document) -> Result<T, JsValue>,
) -> Result<T, JsValue> {
    let mut session = lock_session()?;
    let doc = session.document.as_mut().ok_or_else(|| {
        wasm_warn!("No document loaded");
        edit_error(EditError::NoDocument)
    })?;
    f(doc)
}

/// Set the editor configuration
///
/// # Parameters
/// - `config_js`: partial `EditorConfig` (`offsetUnit`, `cleanup`, `highlightClass`)
#[wasm_bindgen(js_name = configure)]
pub fn configure(config_js: JsValue) -> Result<(), JsValue> {
    wasm_info!("configure called");

    let config: EditorConfig = if config_js.is_undefined() || config_js.is_null() {
        EditorConfig::default()
    } else {
        from_js(config_js, "config")?
    };

    let mut session = lock_session()?;
    if let Some(doc) = session.document.as_mut() {
        doc.config = config.clone();
    }
    wasm_info!("  config: {:?}", config);
    session.config = config;
    Ok(())
}

/// Load a document from a markup fragment (the surface's inner markup)
#[wasm_bindgen(js_name = loadDocument)]
pub fn load_document(markup: &str) -> Result<(), JsValue> {
    wasm_info!("loadDocument called: {} bytes of markup", markup.len());

    let doc = parse_markup(markup).map_err(edit_error)?;
    lock_session()?.install(doc);

    wasm_info!("loadDocument completed successfully");
    Ok(())
}

/// Load a document from a serialized tree (`{ root: {...} }`)
#[wasm_bindgen(js_name = loadDocumentTree)]
pub fn load_document_tree(document_js: JsValue) -> Result<(), JsValue> {
    wasm_info!("loadDocumentTree called");

    let doc: Document = from_js(document_js, "document tree")?;
    lock_session()?.install(doc);

    wasm_info!("loadDocumentTree completed successfully");
    Ok(())
}

/// Get the current document tree
#[wasm_bindgen(js_name = getDocumentTree)]
pub fn get_document_tree() -> Result<JsValue, JsValue> {
    with_document(|doc| to_js(&*doc, "document tree"))
}

/// Get the current document as markup
#[wasm_bindgen(js_name = getMarkup)]
pub fn get_markup() -> Result<String, JsValue> {
    with_document(|doc| Ok(to_markup(doc)))
}

/// Get the linear text projection of the current document
#[wasm_bindgen(js_name = getText)]
pub fn get_text() -> Result<String, JsValue> {
    with_document(|doc| Ok(project_text(doc)))
}

/// Length of the projection in the configured offset unit
#[wasm_bindgen(js_name = getTextLength)]
pub fn get_text_length() -> Result<usize, JsValue> {
    with_document(|doc| Ok(text_len(doc)))
}

/// Drop the loaded document
#[wasm_bindgen(js_name = unloadDocument)]
pub fn unload_document() -> Result<(), JsValue> {
    wasm_info!("unloadDocument called");
    lock_session()?.document = None;
    Ok(())
}
