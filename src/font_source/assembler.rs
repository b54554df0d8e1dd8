//! UFO container assembly
//!
//! Collects the generated glyph set into a norad font: control glyphs,
//! font info with the flex-proportional hinting values, glyph ordering, and
//! the stylistic-set feature text. The assembler is the boundary that rejects
//! invalid configuration; the outline engine below it is total.

use anyhow::{bail, Result};
use tracing::debug;

use crate::font_source::features::feature_file_text;
use crate::font_source::glyphs::{GlyphSet, SPACE_ADVANCE};
use crate::geometry::flex::{FlexAmount, STEM_HEIGHT, STEM_THICKNESS};

/// Everything needed to assemble one Flexy Boy font.
#[derive(Debug, Clone)]
pub struct FontRecipe {
    pub family_name: String,
    pub style_name: String,
    pub max_flex: FlexAmount,
}

impl Default for FontRecipe {
    fn default() -> Self {
        Self {
            family_name: "Flexy Boy".to_string(),
            style_name: "Regular".to_string(),
            max_flex: 5,
        }
    }
}

impl FontRecipe {
    /// Postscript font name, e.g. `FlexyBoy-Regular`.
    pub fn postscript_name(&self) -> String {
        format!(
            "{}-{}",
            self.family_name.replace(' ', ""),
            self.style_name.replace(' ', "")
        )
    }

    /// Assemble the full UFO font from a generated glyph set.
    pub fn assemble(&self, set: &GlyphSet) -> Result<norad::Font> {
        if set.max_flex != self.max_flex {
            bail!(
                "Glyph set was generated for max flex {} but the recipe wants {}",
                set.max_flex,
                self.max_flex
            );
        }
        if self.family_name.trim().is_empty() {
            bail!("Family name must not be empty");
        }

        let mut font = norad::Font::new();
        font.font_info = self.font_info();
        font.features = feature_file_text(self.max_flex);

        let layer = font.default_layer_mut();

        let mut notdef = norad::Glyph::new(".notdef");
        notdef.width = 0.0;
        layer.insert_glyph(notdef);

        let mut space = norad::Glyph::new("space");
        space.width = SPACE_ADVANCE;
        layer.insert_glyph(space);

        for glyph in &set.glyphs {
            layer.insert_glyph(glyph.to_norad_glyph()?);
        }

        let order = set.ordered_names();
        font.lib.insert(
            "public.glyphOrder".to_string(),
            plist::Value::Array(order.into_iter().map(plist::Value::String).collect()),
        );

        debug!(
            "Assembled {} with {} glyphs",
            self.postscript_name(),
            set.glyphs.len() + 2
        );
        Ok(font)
    }

    /// Font info block. The blue values widen with the maximum flex so that
    /// flexed midpoints still fall inside the alignment zones; stem snaps
    /// match the fixed 100-unit stem and bar thickness.
    fn font_info(&self) -> norad::FontInfo {
        let mut info = norad::FontInfo::default();
        info.family_name = Some(self.family_name.clone());
        info.style_name = Some(self.style_name.clone());
        info.postscript_font_name = Some(self.postscript_name());
        info.version_major = Some(1);
        info.version_minor = Some(0);
        if let Some(units_per_em) = norad::fontinfo::NonNegativeIntegerOrFloat::new(1000.0) {
            info.units_per_em = Some(units_per_em);
        }

        let max = f64::from(self.max_flex);
        info.postscript_blue_values = Some(vec![
            -max,
            0.0,
            STEM_THICKNESS,
            STEM_THICKNESS + max,
            STEM_HEIGHT,
            STEM_HEIGHT + max,
        ]);
        info.postscript_stem_snap_v = Some(vec![STEM_THICKNESS]);
        info.postscript_stem_snap_h = Some(vec![STEM_THICKNESS]);
        info
    }
}
