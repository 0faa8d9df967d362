//! FontForge script emission
//!
//! Turns a [`FontSpec`] into the textual program the external compiler
//! executes. Emission is deterministic: the same spec always produces
//! byte-identical script text. Code points are resolved in Rust before
//! emission, so every `Select` targets an explicit slot and an
//! unmappable glyph name can never reach the compiler.

use std::fmt::Write;
use std::path::Path;

use fontweld_core::types::{FontSpec, FONT_STYLE, FONT_VERSION};

/// Builds the compiler script for one generation run.
///
/// Directive order: new font, name metadata, em scale, one import block
/// per glyph in input order, then generate/close/quit.
pub fn build_script(spec: &FontSpec) -> String {
    let name = &spec.config.font_name;
    let mut script = String::new();

    let _ = writeln!(script, "New()");
    let _ = writeln!(
        script,
        "SetFontNames(\"{name}\",\"{name}\",\"{name}\",\"{FONT_STYLE}\")"
    );
    let _ = writeln!(script, "SetTTFName(0x409, 1, \"{name}\")");
    let _ = writeln!(script, "SetTTFName(0x409, 2, \"{FONT_STYLE}\")");
    let _ = writeln!(script, "SetTTFName(0x409, 3, \"{name}\")");
    let _ = writeln!(script, "SetTTFName(0x409, 4, \"{name}\")");
    let _ = writeln!(script, "SetTTFName(0x409, 5, \"{FONT_VERSION}\")");
    let _ = writeln!(script, "ScaleToEm({})", spec.config.em_size);

    for glyph in &spec.glyphs {
        let _ = writeln!(script, "Open(\"{}\")", compiler_path(&glyph.path));
        let _ = writeln!(script, "SelectAll()");
        let _ = writeln!(script, "Copy()");
        let _ = writeln!(script, "Close()");
        let _ = writeln!(script, "Select(0u{:04x})", glyph.code_point as u32);
        let _ = writeln!(script, "Paste()");
        let _ = writeln!(script, "SetWidth({})", spec.config.glyph_advance_width);
        let _ = writeln!(script, "SelectNone()");
    }

    let _ = writeln!(script, "Generate(\"{}\")", compiler_path(&spec.output));
    let _ = writeln!(script, "Close()");
    let _ = writeln!(script, "Quit(0)");

    script
}

/// FontForge expects forward slashes regardless of host platform.
fn compiler_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}
