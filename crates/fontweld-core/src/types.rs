//! The data that flows through both pipelines
//!
//! A generation run is described by a [`FontSpec`]: naming and metric
//! configuration plus the ordered glyph sources it maps into the font.
//! Specs are built per run and consumed once; only the derived compiler
//! script ever reaches disk.

use std::path::PathBuf;

use serde::Serialize;

/// File extension a glyph source must carry.
pub const GLYPH_EXTENSION: &str = "svg";

/// Version string written into the generated font's name table.
pub const FONT_VERSION: &str = "Version 1.0";

/// Style suffix for the single weight fontweld produces.
pub const FONT_STYLE: &str = "Regular";

const DEFAULT_FONT_NAME: &str = "MyCustomFont";
const DEFAULT_EM_SIZE: u32 = 1000;
const DEFAULT_ADVANCE_WIDTH: u32 = 600;

/// One vector image and the code point it maps to
///
/// The code point is derived from the filename stem at collection time
/// and is immutable from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSource {
    /// Path to the vector image file
    pub path: PathBuf,
    /// Unicode identity the glyph is pasted into
    pub code_point: char,
}

/// Naming and metric configuration for a generation run
///
/// The font name is used verbatim for the family, subfamily, and full
/// name fields; only the style suffix differs (always "Regular").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontConfig {
    /// Family name, also used as the subfamily and full name
    pub font_name: String,
    /// Em square size in font units
    pub em_size: u32,
    /// Horizontal advance assigned to every glyph, in font units
    pub glyph_advance_width: u32,
}

impl FontConfig {
    pub fn new(font_name: impl Into<String>) -> Self {
        Self {
            font_name: font_name.into(),
            ..Self::default()
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            font_name: DEFAULT_FONT_NAME.to_string(),
            em_size: DEFAULT_EM_SIZE,
            glyph_advance_width: DEFAULT_ADVANCE_WIDTH,
        }
    }
}

/// Everything one font generation run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub config: FontConfig,
    /// Target path of the generated TrueType file
    pub output: PathBuf,
    /// Glyph sources in the order they are imported
    pub glyphs: Vec<GlyphSource>,
}

impl FontSpec {
    pub fn new(config: FontConfig, output: impl Into<PathBuf>, glyphs: Vec<GlyphSource>) -> Self {
        Self {
            config,
            output: output.into(),
            glyphs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_fixed_metrics() {
        let config = FontConfig::default();
        assert_eq!(config.em_size, 1000);
        assert_eq!(config.glyph_advance_width, 600);
    }

    #[test]
    fn named_config_keeps_default_metrics() {
        let config = FontConfig::new("Fancy");
        assert_eq!(config.font_name, "Fancy");
        assert_eq!(config.em_size, 1000);
    }
}
