//! Rich text engine WASM API
//!
//! JavaScript-facing entry points. The engine holds one document (the model
//! of the host's editable surface); the host loads it, runs commands against
//! linear text offsets, and re-renders from the returned markup.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serde bridging, error conversion
//! - `types`: `EditResult`, the shape every mutating command returns
//! - `core`: session state, configuration, load and read-back
//! - `format`: apply, remove and query tag formatting
//! - `highlight`: literal search and highlight markers
//! - `dom`: load from and render into a live element

pub mod helpers;
pub mod types;
pub mod core;
pub mod format;
pub mod highlight;
pub mod dom;

pub use self::core::*;
pub use dom::{load_from_element, render_into};
pub use format::{active_formats, apply_format, query_format, remove_format};
pub use highlight::{clear_highlight, highlight, search};
pub use types::EditResult;
