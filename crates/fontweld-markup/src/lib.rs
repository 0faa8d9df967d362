//! Fontweld Markup: wiring a generated font into a document
//!
//! The augmentation pipeline in three stages:
//!
//! 1. [`document::Document`] - permissive parse keeping the raw text
//! 2. [`inject::augment`] - style-block injection and re-serialization
//! 3. [`persist::apply_to_file`] - backup first, then overwrite
//!
//! Extraction ([`document::extract_tags`]) shares the parse model with
//! augmentation, so a tag offered for selection is always one the
//! augmenter can act on.

pub mod document;
pub mod inject;
pub mod persist;

pub use document::{extract_tags, Document};
pub use inject::{augment, build_style_block};
pub use persist::{apply_to_file, Applied};
