//! Backup-then-write persistence
//!
//! The ordering invariant lives here: the pre-edit bytes reach the
//! backups directory before the original path is rewritten, and every
//! failure along the way aborts with the original byte-identical on
//! disk. Backups keep a single generation: a later edit of the same
//! document overwrites the previous backup.

use std::fs;
use std::path::{Path, PathBuf};

use fontweld_core::error::{FontweldError, MarkupError, PersistError, Result};
use fontweld_core::report::{Event, Reporter};

use crate::document::Document;
use crate::inject::augment;

/// Outcome of a successful augmentation-and-persist action
#[derive(Debug)]
pub struct Applied {
    /// Where the pre-edit copy was written
    pub backup_path: PathBuf,
    /// The augmented document text that now lives at the original path
    pub new_text: String,
}

/// Augments the document at `path` and persists the change safely.
///
/// Read, parse, and augment all happen before any side effect; then the
/// backup is written, and only after that succeeds is the original
/// overwritten.
pub fn apply_to_file(
    path: &Path,
    font_name: &str,
    tags: &[String],
    reporter: &dyn Reporter,
) -> Result<Applied> {
    let text = fs::read_to_string(path).map_err(|source| MarkupError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let document = Document::parse(&text)?;
    let new_text = augment(document, font_name, tags)?;
    log::debug!(
        "augmented {} from {} to {} bytes",
        path.display(),
        text.len(),
        new_text.len()
    );

    let backup_path = write_backup(path)?;
    reporter.event(&Event::BackupWritten {
        path: backup_path.clone(),
    });

    fs::write(path, &new_text).map_err(|source| PersistError::DocumentWrite {
        path: path.display().to_string(),
        source,
    })?;
    reporter.event(&Event::DocumentModified {
        file: path.to_path_buf(),
        font_name: font_name.to_string(),
        tags: tags.to_vec(),
    });

    Ok(Applied {
        backup_path,
        new_text,
    })
}

/// Copies the pre-edit file into `<dir>/backups/<filename>`.
fn write_backup(path: &Path) -> std::result::Result<PathBuf, FontweldError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let backup_dir = dir.join("backups");
    fs::create_dir_all(&backup_dir).map_err(|source| PersistError::BackupDir {
        path: backup_dir.display().to_string(),
        source,
    })?;

    let file_name = path
        .file_name()
        .ok_or_else(|| FontweldError::InvalidInput(format!("not a file: {}", path.display())))?;
    let backup_path = backup_dir.join(file_name);

    // fs::copy keeps the backup byte-for-byte identical to the source.
    fs::copy(path, &backup_path).map_err(|source| PersistError::BackupWrite {
        path: backup_path.display().to_string(),
        source,
    })?;

    Ok(backup_path)
}
