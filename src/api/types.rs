//! Shared types for the WASM API
//!
//! This module contains common result types used across multiple API modules.

use crate::converters::to_markup;
use crate::models::Document;
use crate::text::project_text;

/// Result of an edit operation (mutation primitive)
///
/// Carries the mutated document's markup so the host can re-render its
/// editable surface in one step.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EditResult {
    /// Whether the edit changed (or could have changed) the document
    pub applied: bool,
    /// Number of containers created or removed
    pub affected: usize,
    pub markup: String,
    pub text: String,
}

impl EditResult {
    pub fn from_document(doc: &Document, applied: bool, affected: usize) -> Self {
        Self {
            applied,
            affected,
            markup: to_markup(doc),
            text: project_text(doc),
        }
    }
}
