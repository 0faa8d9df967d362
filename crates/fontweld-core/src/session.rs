//! Session-scoped resources
//!
//! A [`Session`] owns what persists across the actions of one run of the
//! tool: the optional compiler capability, the temporary directory every
//! compiler script is written under, and the reporter. The temporary
//! directory is removed when the session drops, normal exit or unwind.

use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use crate::report::{Event, Reporter};

/// Exclusive owner of per-run shared state
///
/// Single-threaded by design: at most one font build and one document
/// edit are ever in flight, never concurrently.
pub struct Session {
    compiler: Option<PathBuf>,
    temp: TempDir,
    reporter: Arc<dyn Reporter>,
}

impl Session {
    /// Starts a session and reports compiler availability once.
    pub fn start(compiler: Option<PathBuf>, reporter: Arc<dyn Reporter>) -> io::Result<Self> {
        let temp = TempDir::new()?;

        match &compiler {
            Some(path) => reporter.event(&Event::CompilerFound { path: path.clone() }),
            None => reporter.event(&Event::CompilerMissing),
        }

        Ok(Self {
            compiler,
            temp,
            reporter,
        })
    }

    /// The external compiler binary, when one was found.
    pub fn compiler(&self) -> Option<&Path> {
        self.compiler.as_deref()
    }

    /// Whether font generation is available this session.
    pub fn can_generate(&self) -> bool {
        self.compiler.is_some()
    }

    /// Scratch directory for per-run artifacts such as compiler scripts.
    pub fn temp_dir(&self) -> &Path {
        self.temp.path()
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }
}
