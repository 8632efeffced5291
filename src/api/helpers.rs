//! Plumbing shared by the host-facing commands
//!
//! Console output for the `[WASM]`-prefixed trace the host sees in devtools,
//! conversion of engine values to and from `JsValue`, and the mapping of
//! [`EditError`] onto rejected calls.

use crate::error::EditError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = info)]
    fn console_info(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

/// Severity of a console line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Write one `[WASM]` line to the browser console
pub fn console(level: ConsoleLevel, msg: &str) {
    match level {
        ConsoleLevel::Debug => console_log(&format!("[WASM] {}", msg)),
        ConsoleLevel::Info => console_info(&format!("[WASM] {}", msg)),
        ConsoleLevel::Warn => console_warn(&format!("[WASM] ⚠️ {}", msg)),
        ConsoleLevel::Error => console_error(&format!("[WASM] ❌ {}", msg)),
    }
}

/// Per-command trace: arguments, intermediate counts
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Debug, &format!($($arg)*))
    };
}

/// Command entry and completion
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Info, &format!($($arg)*))
    };
}

/// Non-fatal problems: stale ranges, skipped markers, missing document
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Warn, &format!($($arg)*))
    };
}

/// Failures that reject the call
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Error, &format!($($arg)*))
    };
}

/// Read a config or document tree handed over by the host
///
/// `what` names the value in the rejection message.
pub fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| reject(&format!("bad {}: {}", what, e)))
}

/// Hand an engine value (`EditResult`, a document tree, a range) to the host
pub fn to_js<T: Serialize>(value: &T, what: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| reject(&format!("cannot convert {}: {}", what, e)))
}

/// Turn an engine error into a rejected call
pub fn edit_error(err: EditError) -> JsValue {
    reject(&err.to_string())
}

fn reject(msg: &str) -> JsValue {
    console(ConsoleLevel::Error, msg);
    JsValue::from_str(msg)
}

/// Marker class sent by the host, or `default` when it sent none (or blank)
pub fn marker_class_or(class: Option<String>, default: &str) -> String {
    class
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
