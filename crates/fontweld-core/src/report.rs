//! The message sink both pipelines talk to
//!
//! Pipelines never print: they hand [`Event`] values to a [`Reporter`]
//! and any front end decides how to render them. [`LogReporter`] relays
//! them through the `log` facade; [`BufferReporter`] collects rendered
//! lines for tests and for front ends that print a summary afterwards.

use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

/// Progress and outcome messages emitted by the pipelines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The external compiler was located at startup
    CompilerFound { path: PathBuf },
    /// No compiler is installed; generation is unavailable this session
    CompilerMissing,
    /// Glyph sources were enumerated and validated
    GlyphsCollected { dir: PathBuf, count: usize },
    /// The compiler script was written to its temporary location
    ScriptWritten { path: PathBuf },
    /// The compiler finished and the font file exists
    FontGenerated { output: PathBuf },
    /// Tag vocabulary was extracted from a document
    TagsExtracted { file: PathBuf, count: usize },
    /// A byte-for-byte copy of the pre-edit document was written
    BackupWritten { path: PathBuf },
    /// The augmented document replaced the original
    DocumentModified {
        file: PathBuf,
        font_name: String,
        tags: Vec<String>,
    },
}

impl Event {
    /// Events that signal degraded capability rather than progress.
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::CompilerMissing)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::CompilerFound { path } => {
                write!(f, "FontForge found at {}", path.display())
            }
            Event::CompilerMissing => {
                write!(f, "FontForge not found; font generation disabled")
            }
            Event::GlyphsCollected { dir, count } => {
                write!(f, "Collected {} glyph file(s) from {}", count, dir.display())
            }
            Event::ScriptWritten { path } => {
                write!(f, "Compiler script written to {}", path.display())
            }
            Event::FontGenerated { output } => {
                write!(f, "Font generated: {}", output.display())
            }
            Event::TagsExtracted { file, count } => {
                write!(f, "Found {} tag(s) in {}", count, file.display())
            }
            Event::BackupWritten { path } => {
                write!(f, "Backup written to {}", path.display())
            }
            Event::DocumentModified {
                file,
                font_name,
                tags,
            } => {
                write!(
                    f,
                    "Modified {}: tags [{}] now use font '{}'",
                    file.display(),
                    tags.join(", "),
                    font_name
                )
            }
        }
    }
}

/// Where pipeline messages go
///
/// Implementations must be cheap to call; pipelines report every
/// significant step through this seam.
pub trait Reporter {
    fn event(&self, event: &Event);
}

/// Relays events through the `log` facade
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn event(&self, event: &Event) {
        if event.is_warning() {
            log::warn!("{event}");
        } else {
            log::info!("{event}");
        }
    }
}

/// Collects rendered event lines in memory
#[derive(Debug, Default)]
pub struct BufferReporter {
    lines: Mutex<Vec<String>>,
}

impl BufferReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered lines in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl Reporter for BufferReporter {
    fn event(&self, event: &Event) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(event.to_string());
        }
    }
}
