//! Generate command implementation
//!
//! Runs the glyph-to-font pipeline: collect, build script, invoke the
//! compiler. With `--script-out` the compiler never runs; the derived
//! script is written for inspection instead.

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use fontweld_core::error::{FontweldError, Result};
use fontweld_core::session::Session;
use fontweld_core::types::{FontConfig, FontSpec};
use fontweld_forge::{build_script, collect_glyphs, find_compiler, run_generation};

use crate::cli::GenerateArgs;
use crate::console::ConsoleReporter;

pub fn run(args: &GenerateArgs) -> Result<()> {
    let config = FontConfig {
        font_name: args.font_name.clone(),
        em_size: args.em_size,
        glyph_advance_width: args.advance_width,
    };

    if let Some(script_path) = &args.script_out {
        return write_script_only(args, config, script_path);
    }

    let reporter = Arc::new(ConsoleReporter::new(args.quiet));
    let session = Session::start(find_compiler(), reporter)?;

    let timeout = args.timeout_secs.map(Duration::from_secs);
    let outcome = run_generation(&session, config, &args.glyph_dir, &args.output, timeout)?;

    if !args.quiet {
        eprintln!("✓ Font generated: {}", args.output.display());
        if !outcome.stdout.trim().is_empty() {
            eprintln!("{}", outcome.stdout.trim_end());
        }
    }
    Ok(())
}

fn write_script_only(
    args: &GenerateArgs,
    config: FontConfig,
    script_path: &std::path::Path,
) -> Result<()> {
    let glyphs = collect_glyphs(&args.glyph_dir)?;
    if glyphs.is_empty() {
        return Err(FontweldError::InvalidInput(format!(
            "no *.svg glyph files in {}",
            args.glyph_dir.display()
        )));
    }

    let spec = FontSpec::new(config, &args.output, glyphs);
    fs::write(script_path, build_script(&spec))?;

    if !args.quiet {
        eprintln!("✓ Compiler script written to {}", script_path.display());
    }
    Ok(())
}
