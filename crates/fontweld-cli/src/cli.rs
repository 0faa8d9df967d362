//! CLI argument definitions using Clap v4
//!
//! Each pipeline trigger from the original desktop shell maps to one
//! subcommand; the pipelines themselves live in the library crates.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fontweld - build a TrueType font from SVG glyphs and wire it into a document
#[derive(Parser, Debug)]
#[command(name = "fontweld")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display compiler capability and version information
    #[command(alias = "i")]
    Info,

    /// Generate a TrueType font from a directory of SVG glyphs
    #[command(alias = "g")]
    Generate(GenerateArgs),

    /// List the tag vocabulary of a markup document
    #[command(alias = "t")]
    Tags(TagsArgs),

    /// Inject a font-face style block into a document, with backup
    #[command(alias = "a")]
    Apply(ApplyArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Directory containing *.svg glyph files (stems name code points:
    /// a single character, or a U+XXXX escape)
    #[arg(short = 'g', long = "glyph-dir")]
    pub glyph_dir: PathBuf,

    /// Output TrueType file path
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Font family name (also used as subfamily and full name)
    #[arg(short = 'n', long = "font-name", default_value = "MyCustomFont")]
    pub font_name: String,

    /// Em square size in font units
    #[arg(long = "em-size", default_value = "1000")]
    pub em_size: u32,

    /// Advance width assigned to every glyph, in font units
    #[arg(long = "advance-width", default_value = "600")]
    pub advance_width: u32,

    /// Kill the compiler if it runs longer than this many seconds
    #[arg(long = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    /// Write the compiler script here instead of invoking the compiler
    #[arg(long = "script-out")]
    pub script_out: Option<PathBuf>,

    /// Silent mode (no progress info)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Arguments for the tags command
#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Markup document to inspect (.html, .htm, .php)
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,

    /// Emit the tag list as a JSON array
    #[arg(long = "json")]
    pub json: bool,
}

/// Arguments for the apply command
#[derive(Parser, Debug)]
pub struct ApplyArgs {
    /// Markup document to modify
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,

    /// Font family name the style block references
    #[arg(short = 'n', long = "font-name", default_value = "MyCustomFont")]
    pub font_name: String,

    /// Comma-separated tags to restyle; order is kept in the selector
    #[arg(short = 't', long = "tags", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Silent mode (no progress info)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}
