//! Fontweld Core: what the two pipelines share
//!
//! Fontweld turns a directory of vector glyph images into a TrueType
//! font through an external compiler, and wires that font into a markup
//! document. The two pipelines are independent; this crate holds the
//! pieces they have in common:
//!
//! - [`types`] - glyph sources, font configuration, the per-run spec
//! - [`error`] - the error taxonomy, one enum per failure class
//! - [`report`] - the event seam every pipeline message flows through
//! - [`session`] - compiler capability and the scoped temp directory
//!
//! Nothing here touches the filesystem except [`session::Session`],
//! which owns the one temporary directory a run is allowed.

pub mod error;
pub mod report;
pub mod session;
pub mod types;

pub use error::{CompileError, FontweldError, GlyphError, MarkupError, PersistError, Result};
pub use report::{BufferReporter, Event, LogReporter, Reporter};
pub use session::Session;
pub use types::{FontConfig, FontSpec, GlyphSource};
