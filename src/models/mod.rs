//! Models module for the rich text engine
//!
//! This module contains the document tree and the configuration
//! carried with it.

pub mod config;
pub mod document;
pub mod node;

// Re-export commonly used types
pub use config::{CleanupDepth, EditorConfig, OffsetUnit, DEFAULT_HIGHLIGHT_CLASS};
pub use document::{Document, ROOT_TAG};
pub use node::{ContainerNode, Node, NodePath, TextLeaf};
