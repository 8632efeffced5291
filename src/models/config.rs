//! Editor configuration
//!
//! Supplied by the JavaScript host (camelCase JSON), every field optional.

use serde::{Deserialize, Serialize};

/// Default marker class for search highlights
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "highlight";

/// Unit in which linear offsets are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// UTF-16 code units, matching JavaScript string lengths
    #[default]
    Utf16,
    /// Unicode scalar values
    Char,
}

/// How far the empty-container sweep reaches after a wrap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanupDepth {
    /// Direct children of the new wrapper only
    #[default]
    Shallow,
    /// Every descendant of the new wrapper
    Recursive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    pub offset_unit: OffsetUnit,
    pub cleanup: CleanupDepth,
    pub highlight_class: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            offset_unit: OffsetUnit::default(),
            cleanup: CleanupDepth::default(),
            highlight_class: DEFAULT_HIGHLIGHT_CLASS.to_string(),
        }
    }
}
