//! Generated glyph records and full-set iteration
//!
//! A `GeneratedGlyph` is the immutable product of one outline-engine call:
//! key, outline, advance width, and the optional Unicode assignment. The
//! `GlyphSet` collects every (archetype, style, flex) combination for a font
//! build and owns the glyph-ordering hook used by the container assembler and
//! the alias export.

use kurbo::BezPath;

use crate::core::errors::validate_max_flex;
use crate::geometry::flex::{Archetype, FlexAmount, GlyphKey, RenderStyle};

/// Advance width of the space glyph.
pub const SPACE_ADVANCE: f64 = 500.0;

/// One generated outline plus its font-facing metadata.
#[derive(Debug, Clone)]
pub struct GeneratedGlyph {
    pub key: GlyphKey,
    pub outline: BezPath,
    pub advance_width: f64,
    pub codepoint: Option<char>,
}

impl GeneratedGlyph {
    /// Run the outline engine for one glyph key.
    pub fn generate(key: GlyphKey) -> Self {
        Self {
            outline: key.outline(),
            advance_width: key.archetype.advance_width(),
            codepoint: key.codepoint(),
            key,
        }
    }

    pub fn glyph_name(&self) -> String {
        self.key.glyph_name()
    }
}

/// The full set of flex glyphs for one font build.
#[derive(Debug, Clone)]
pub struct GlyphSet {
    pub glyphs: Vec<GeneratedGlyph>,
    pub max_flex: FlexAmount,
}

impl GlyphSet {
    /// Generate every archetype/style combination for flex amounts
    /// `0..=max_flex`. Rejects an out-of-range maximum up front; silently
    /// clamping would break the glyph-name/parameter correspondence that the
    /// stylistic sets depend on.
    pub fn generate(max_flex: FlexAmount) -> anyhow::Result<Self> {
        validate_max_flex(max_flex)?;

        let mut glyphs = Vec::new();
        for flex in 0..=max_flex {
            for archetype in Archetype::ALL {
                for style in RenderStyle::ALL {
                    glyphs.push(GeneratedGlyph::generate(GlyphKey::new(
                        archetype, style, flex,
                    )));
                }
            }
        }
        Ok(Self { glyphs, max_flex })
    }

    /// Final glyph order: `.notdef` and `space` first, then the flex glyphs
    /// sorted by name. Plain lexicographic order, so two-digit flex
    /// amounts sort before single-digit ones.
    pub fn ordered_names(&self) -> Vec<String> {
        let mut flex_names: Vec<String> = self.glyphs.iter().map(|g| g.glyph_name()).collect();
        flex_names.sort();

        let mut names = vec![".notdef".to_string(), "space".to_string()];
        names.extend(flex_names);
        names
    }

    /// Unicode value carried by a glyph, if any.
    pub fn codepoint_for(&self, name: &str) -> Option<char> {
        self.glyphs
            .iter()
            .find(|g| g.glyph_name() == name)
            .and_then(|g| g.codepoint)
    }
}
