//! Apply command implementation
//!
//! Triggers the augmentation pipeline: parse the document, inject the
//! style block for the selected tags, back up, persist. Rejects an
//! empty selection before anything touches the disk.

use fontweld_core::error::Result;
use fontweld_markup::apply_to_file;

use crate::cli::ApplyArgs;
use crate::console::ConsoleReporter;

pub fn run(args: &ApplyArgs) -> Result<()> {
    // Stray commas ("div,,p") produce empty entries; drop them so the
    // no-tags validation sees the real selection.
    let tags: Vec<String> = args
        .tags
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let reporter = ConsoleReporter::new(args.quiet);
    let applied = apply_to_file(&args.file, &args.font_name, &tags, &reporter)?;

    if !args.quiet {
        eprintln!("✓ Modified {}", args.file.display());
        eprintln!("  Backup: {}", applied.backup_path.display());
    }
    Ok(())
}
