//! Fontweld Forge: from glyph images to a TrueType file
//!
//! The generation pipeline in three stages:
//!
//! 1. [`collect::collect_glyphs`] - enumerate and validate glyph sources
//! 2. [`script::build_script`] - derive the deterministic compiler script
//! 3. [`compile::compile`] - run the external compiler against it
//!
//! [`run_generation`] strings the stages together for callers that want
//! the whole pipeline as one action.

pub mod collect;
pub mod compile;
pub mod script;

use std::path::Path;
use std::time::Duration;

use fontweld_core::error::{CompileError, FontweldError, Result};
use fontweld_core::report::Event;
use fontweld_core::session::Session;
use fontweld_core::types::{FontConfig, FontSpec};

pub use collect::{code_point_from_stem, collect_glyphs};
pub use compile::{compile, find_compiler, CompileOutcome, COMPILER_ENV};
pub use script::build_script;

/// Runs the full generation pipeline as one action.
///
/// Refused up front when the session has no compiler capability or the
/// directory holds no glyph files; both leave no side effects.
pub fn run_generation(
    session: &Session,
    config: FontConfig,
    glyph_dir: &Path,
    output: &Path,
    timeout: Option<Duration>,
) -> Result<CompileOutcome> {
    let Some(compiler) = session.compiler() else {
        return Err(CompileError::CompilerNotFound.into());
    };

    let glyphs = collect_glyphs(glyph_dir)?;
    if glyphs.is_empty() {
        return Err(FontweldError::InvalidInput(format!(
            "no *.svg glyph files in {}",
            glyph_dir.display()
        )));
    }
    session.reporter().event(&Event::GlyphsCollected {
        dir: glyph_dir.to_path_buf(),
        count: glyphs.len(),
    });

    let spec = FontSpec::new(config, output, glyphs);
    let outcome = compile(compiler, &spec, session.temp_dir(), timeout, session.reporter())?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontweld_core::report::BufferReporter;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn session(compiler: Option<&str>) -> (Session, Arc<BufferReporter>) {
        let reporter = Arc::new(BufferReporter::new());
        let session = Session::start(
            compiler.map(std::path::PathBuf::from),
            reporter.clone(),
        )
        .unwrap();
        (session, reporter)
    }

    #[test]
    fn generation_is_refused_without_a_compiler() {
        let (session, _) = session(None);
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.svg"), "<svg/>").unwrap();

        let err = run_generation(
            &session,
            FontConfig::default(),
            dir.path(),
            Path::new("out.ttf"),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FontweldError::Compile(CompileError::CompilerNotFound)
        ));
    }

    #[test]
    fn empty_glyph_directory_is_rejected_before_any_side_effect() {
        let (session, reporter) = session(Some("/bin/true"));
        let dir = TempDir::new().unwrap();

        let err = run_generation(
            &session,
            FontConfig::default(),
            dir.path(),
            Path::new("out.ttf"),
            None,
        )
        .unwrap_err();

        assert!(matches!(err, FontweldError::InvalidInput(_)));
        // Only the startup capability line; nothing from the pipeline.
        assert_eq!(reporter.lines().len(), 1);
        assert!(!session.temp_dir().join("generate_font.pe").exists());
    }

    #[cfg(unix)]
    #[test]
    fn full_pipeline_reports_each_stage() {
        let (session, reporter) = session(Some("/bin/true"));
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("b.svg"), "<svg/>").unwrap();

        run_generation(
            &session,
            FontConfig::new("MyCustomFont"),
            dir.path(),
            &dir.path().join("out.ttf"),
            None,
        )
        .unwrap();

        let lines = reporter.lines();
        assert!(lines[1].contains("Collected 2 glyph file(s)"));
        assert!(lines[2].contains("generate_font.pe"));
        assert!(lines[3].contains("out.ttf"));
    }
}
