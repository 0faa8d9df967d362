//! Glyph discovery and code-point derivation
//!
//! The first stage of the generation pipeline. Enumerates vector images
//! in a directory and pins each one to the Unicode code point its
//! filename encodes. A stem is either a `U+XXXX` escape or a plain name
//! whose first character is the identity; anything unmappable is an
//! error carrying the offending filename, never a silent skip.

use std::fs;
use std::path::Path;

use fontweld_core::error::GlyphError;
use fontweld_core::types::{GlyphSource, GLYPH_EXTENSION};

/// Enumerates glyph files in `dir`, sorted lexicographically by filename
///
/// Only files with the glyph extension participate. An empty directory
/// yields an empty Vec; a missing directory is a distinct error.
pub fn collect_glyphs(dir: &Path) -> Result<Vec<GlyphSource>, GlyphError> {
    if !dir.is_dir() {
        return Err(GlyphError::DirectoryNotFound(dir.display().to_string()));
    }

    let entries = fs::read_dir(dir).map_err(|source| GlyphError::DirectoryUnreadable {
        path: dir.display().to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| GlyphError::DirectoryUnreadable {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext == GLYPH_EXTENSION => files.push(path),
            _ => continue,
        }
    }

    // Filename order is the import order; keep it stable across platforms.
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut glyphs = Vec::with_capacity(files.len());
    for path in files {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| GlyphError::NonUtf8Name(path.display().to_string()))?
            .to_string();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();

        let code_point = code_point_from_stem(&file_name, stem)?;
        glyphs.push(GlyphSource { path, code_point });
    }

    log::debug!("collected {} glyph source(s)", glyphs.len());
    Ok(glyphs)
}

/// Resolves a filename stem to the code point it names
///
/// `U+0041` (or `u+0041`, 2 to 6 hex digits) is a code-point escape;
/// any other non-empty stem contributes its first character.
pub fn code_point_from_stem(file_name: &str, stem: &str) -> Result<char, GlyphError> {
    if stem.is_empty() {
        return Err(GlyphError::EmptyStem(file_name.to_string()));
    }

    if let Some(hex) = stem.strip_prefix("U+").or_else(|| stem.strip_prefix("u+")) {
        let bad_escape = || GlyphError::BadEscape {
            file: file_name.to_string(),
            escape: stem.to_string(),
        };
        if hex.len() < 2 || hex.len() > 6 {
            return Err(bad_escape());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| bad_escape())?;
        return char::from_u32(value).ok_or_else(bad_escape);
    }

    stem.chars()
        .next()
        .ok_or_else(|| GlyphError::EmptyStem(file_name.to_string()))
}
