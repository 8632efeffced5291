//! Structural operations on the document tree
//!
//! This module provides the edits that reshape the tree while leaving its
//! text untouched:
//! - `wrap`: wrap a linear range in a new container (apply a format)
//! - `unwrap`: remove containers overlapping a range (remove a format)
//! - `query`: read-only format overlap checks
//! - `normalize`: leaf merging and empty-container cleanup
//!
//! All operations resolve offsets against the current tree on every call.

pub mod normalize;
pub mod query;
pub mod unwrap;
pub mod wrap;

pub use normalize::{normalize, normalize_document, remove_empty_children};
pub use query::{formats_in_range, has_format_in_range};
pub use unwrap::{flatten_at, splice_children_at, unwrap_tag, UnwrapReport};
pub use wrap::{format_range, mark_range, wrap_range};
