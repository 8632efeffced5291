//! Format operations
//!
//! Apply, remove and query tag formatting over a linear range of the loaded
//! document. Ranges that no longer resolve (a selection computed before the
//! surface changed) are not errors for the host: the command reports
//! `applied: false` and leaves the document alone.

use crate::api::core::with_document;
use crate::api::helpers::{edit_error, to_js};
use crate::api::types::EditResult;
use crate::error::{validate_tag_name, EditError};
use crate::structure::{format_range, formats_in_range, has_format_in_range, unwrap_tag};
use crate::{wasm_info, wasm_log, wasm_warn};
use wasm_bindgen::prelude::*;

/// Wrap `[start, end)` in a new `<tagName>` element
///
/// # Returns
/// `EditResult` with the updated markup; `applied` is false when the range
/// could not be resolved
#[wasm_bindgen(js_name = applyFormat)]
pub fn apply_format(start: usize, end: usize, tag_name: &str) -> Result<JsValue, JsValue> {
    wasm_info!("applyFormat called: <{}> {}..{}", tag_name, start, end);

    let result = with_document(|doc| {
        let applied = match format_range(doc, start, end, tag_name) {
            Ok(()) => true,
            Err(err @ EditError::RangeUnresolved { .. }) => {
                wasm_warn!("  {}, nothing applied", err);
                false
            }
            Err(err) => return Err(edit_error(err)),
        };
        Ok(EditResult::from_document(doc, applied, usize::from(applied && start < end)))
    })?;

    wasm_info!("applyFormat completed: applied={}", result.applied);
    to_js(&result, "EditResult")
}

/// Remove every `<tagName>` element overlapping `[start, end)`, keeping its text
#[wasm_bindgen(js_name = removeFormat)]
pub fn remove_format(start: usize, end: usize, tag_name: &str) -> Result<JsValue, JsValue> {
    wasm_info!("removeFormat called: <{}> {}..{}", tag_name, start, end);
    validate_tag_name(tag_name).map_err(edit_error)?;

    let result = with_document(|doc| {
        let report = unwrap_tag(doc, start, end, tag_name);
        if report.skipped > 0 {
            wasm_warn!("  {} stale elements skipped", report.skipped);
        }
        wasm_log!("  unwrapped {} elements", report.unwrapped);
        Ok(EditResult::from_document(doc, report.unwrapped > 0, report.unwrapped))
    })?;

    to_js(&result, "EditResult")
}

/// Check whether any `<tagName>` element overlaps `[start, end)`
#[wasm_bindgen(js_name = queryFormat)]
pub fn query_format(start: usize, end: usize, tag_name: &str) -> Result<bool, JsValue> {
    wasm_log!("queryFormat called: <{}> {}..{}", tag_name, start, end);
    validate_tag_name(tag_name).map_err(edit_error)?;
    with_document(|doc| Ok(has_format_in_range(doc, start, end, tag_name)))
}

/// Tags of all elements overlapping `[start, end)`, for toolbar state
#[wasm_bindgen(js_name = activeFormats)]
pub fn active_formats(start: usize, end: usize) -> Result<js_sys::Array, JsValue> {
    wasm_log!("activeFormats called: {}..{}", start, end);

    let tags = with_document(|doc| Ok(formats_in_range(doc, start, end)))?;
    let result = js_sys::Array::new();
    for tag in tags {
        result.push(&JsValue::from_str(&tag));
    }
    Ok(result)
}
