//! Search and highlight operations

use crate::api::core::with_document;
use crate::api::helpers::{edit_error, marker_class_or, to_js};
use crate::api::types::EditResult;
use crate::search::{clear_highlights, find_occurrences, highlight_occurrences};
use crate::{wasm_info, wasm_log};
use wasm_bindgen::prelude::*;

/// Mark every occurrence of `search_text`, replacing earlier markers
///
/// # Parameters
/// - `search_text`: literal text (no pattern syntax)
/// - `marker_class`: marker class, defaults to the configured highlight class
#[wasm_bindgen(js_name = highlight)]
pub fn highlight(search_text: &str, marker_class: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!("highlight called: {:?}", search_text);

    let result = with_document(|doc| {
        let class = marker_class_or(marker_class, &doc.config.highlight_class);
        let report = highlight_occurrences(doc, search_text, &class).map_err(edit_error)?;
        wasm_log!(
            "  .{}: cleared {}, applied {}, skipped {}",
            class,
            report.cleared,
            report.applied,
            report.skipped
        );
        Ok(EditResult::from_document(
            doc,
            report.applied > 0 || report.cleared > 0,
            report.applied,
        ))
    })?;

    to_js(&result, "EditResult")
}

/// Remove all markers of `marker_class`, keeping their content
#[wasm_bindgen(js_name = clearHighlight)]
pub fn clear_highlight(marker_class: Option<String>) -> Result<JsValue, JsValue> {
    wasm_info!("clearHighlight called");

    let result = with_document(|doc| {
        let class = marker_class_or(marker_class, &doc.config.highlight_class);
        let removed = clear_highlights(doc, &class);
        wasm_log!("  removed {} .{} markers", removed, class);
        Ok(EditResult::from_document(doc, removed > 0, removed))
    })?;

    to_js(&result, "EditResult")
}

/// Find all non-overlapping occurrences of `literal_text`
///
/// # Returns
/// Array of `{ start, end }` offsets, left to right
#[wasm_bindgen(js_name = search)]
pub fn search(literal_text: &str) -> Result<js_sys::Array, JsValue> {
    wasm_log!("search called: {:?}", literal_text);

    let occurrences = with_document(|doc| Ok(find_occurrences(doc, literal_text)))?;
    let result = js_sys::Array::new();
    for occurrence in &occurrences {
        result.push(&to_js(occurrence, "search result")?);
    }
    Ok(result)
}
