//! Error types for document edits
//!
//! Stale or unresolvable inputs are reported here instead of silently
//! ignored; the WASM layer decides which of them stay non-fatal for the host.

use thiserror::Error;

/// Result alias for engine operations
pub type EditOutcome<T = ()> = Result<T, EditError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A linear range could not be anchored to text leaves
    #[error("range {start}..{end} cannot be resolved in a document of length {len}")]
    RangeUnresolved { start: usize, end: usize, len: usize },

    /// Tag name is not usable for a new container
    #[error("invalid tag name: {0:?}")]
    InvalidTagName(String),

    /// Class name is empty or contains whitespace
    #[error("invalid class name: {0:?}")]
    InvalidClassName(String),

    /// Markup could not be parsed into a document
    #[error("invalid markup: {0}")]
    InvalidMarkup(String),

    /// The session has no document loaded
    #[error("no document loaded")]
    NoDocument,
}

/// Validate a tag name for a new container (`[A-Za-z][A-Za-z0-9-]*`)
pub fn validate_tag_name(tag: &str) -> EditOutcome {
    let mut chars = tag.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(EditError::InvalidTagName(tag.to_string()))
    }
}

/// Validate a single class token
pub fn validate_class_name(class: &str) -> EditOutcome {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        return Err(EditError::InvalidClassName(class.to_string()));
    }
    Ok(())
}
