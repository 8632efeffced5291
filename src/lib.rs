//! Rich Text Engine WASM Module
//!
//! Structural editing for the content of a rich-text editable surface. The
//! document is a tree of text leaves and formatting containers; every
//! command addresses it through offsets into its linear text projection.
//!
//! - `text`: projection, offset resolution, text ranges
//! - `structure`: wrap a range in a container, unwrap containers, query formats
//! - `search`: literal search and highlight markers
//! - `converters`: markup parsing and serialization
//! - `api`: the JavaScript-facing session

pub mod api;
pub mod converters;
pub mod error;
pub mod models;
pub mod search;
pub mod structure;
pub mod text;

// Re-export commonly used types
pub use error::{EditError, EditOutcome};
pub use models::{
    CleanupDepth, ContainerNode, Document, EditorConfig, Node, NodePath, OffsetUnit, TextLeaf,
};
pub use text::TextRange;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            use api::helpers::{console, ConsoleLevel};
            console(ConsoleLevel::Warn, "logger already initialized");
        }
    }

    log::info!("Rich text engine WASM module initialized");
}
