//! Format converters
//!
//! This module contains converters between the document tree and the
//! formats the host exchanges it in.

pub mod markup;

// Re-export for convenience
pub use markup::{parse_markup, to_markup};
