//! Layer 0: Text projection and offset addressing
//!
//! This module maps between the two coordinate systems of a document:
//! linear offsets into the concatenated text, and structural positions
//! (a text leaf plus an offset into it).
//!
//! ## Modules
//!
//! - `metric`: measuring and slicing strings in the configured offset unit
//! - `projection`: the linear projection and offset-to-leaf resolution
//! - `range`: linear ranges, structural ranges and the range resolver

pub mod metric;
pub mod projection;
pub mod range;

// Re-exports for convenience
pub use projection::{
    element_spans, project_text, resolve_end_offset, resolve_offset, text_len,
    Bias, ElementSpan,
};
pub use range::{resolve_range, StructuralPosition, StructuralRange, TextRange};
