//! Error types for fontweld

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FontweldError>;

/// Main error type for fontweld
#[derive(Debug, Error)]
pub enum FontweldError {
    #[error("Glyph collection failed: {0}")]
    Glyph(#[from] GlyphError),

    #[error("Font compilation failed: {0}")]
    Compile(#[from] CompileError),

    #[error("Markup edit failed: {0}")]
    Markup(#[from] MarkupError),

    #[error("Persistence failed: {0}")]
    Persist(#[from] PersistError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Glyph collection errors
///
/// An unusable filename is a data-quality defect in the glyph set and is
/// reported per file, never skipped.
#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("Glyph directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Glyph directory is not readable: {path}: {source}")]
    DirectoryUnreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("Glyph filename is not valid UTF-8: {0}")]
    NonUtf8Name(String),

    #[error("No code point can be derived from {0:?}: empty file stem")]
    EmptyStem(String),

    #[error("Invalid Unicode escape in glyph filename {file:?}: {escape:?}")]
    BadEscape { file: String, escape: String },
}

/// Font compiler errors
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("FontForge binary not found; font generation is unavailable")]
    CompilerNotFound,

    #[error("Cannot write compiler script {path}: {source}")]
    ScriptWrite {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to launch compiler {path}: {source}")]
    Spawn {
        path: String,
        source: std::io::Error,
    },

    #[error("Compiler exited with {status}: {stderr}")]
    CompilerFailed { status: String, stderr: String },

    #[error("Compiler did not finish within {secs}s and was killed")]
    Timeout { secs: u64 },
}

/// Markup parsing and augmentation errors
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("Cannot read document {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Document is not parseable markup: {0}")]
    Parse(String),

    #[error("Document has no element to anchor a head section on")]
    NoDocumentElement,

    #[error("No tags selected")]
    NoTagsSelected,

    #[error("Selected tag {0:?} does not occur in the document")]
    UnknownTag(String),
}

/// Persistence errors
///
/// All of these abort before the original document is touched.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Cannot create backup directory {path}: {source}")]
    BackupDir {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot write backup {path}: {source}")]
    BackupWrite {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot write document {path}: {source}")]
    DocumentWrite {
        path: String,
        source: std::io::Error,
    },
}
