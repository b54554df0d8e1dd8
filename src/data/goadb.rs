//! GlyphOrderAndAliasDB export
//!
//! A pure projection of the glyph set: one tab-separated record per glyph in
//! final order, carrying the final name, the production name, and a
//! `uniXXXX` alias for the glyphs that encode a character.

use crate::font_source::glyphs::GlyphSet;

/// Build the GlyphOrderAndAliasDB text for a glyph set.
pub fn goadb_text(set: &GlyphSet) -> String {
    let mut lines = Vec::new();
    for name in set.ordered_names() {
        let mut fields = vec![name.clone(), name.clone()];
        if let Some(codepoint) = set.codepoint_for(&name) {
            fields.push(format!("uni{:04X}", codepoint as u32));
        }
        lines.push(fields.join("\t"));
    }
    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_follow_final_order_with_unicode_aliases() {
        let set = GlyphSet::generate(1).unwrap();
        let text = goadb_text(&set);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], ".notdef\t.notdef");
        assert_eq!(lines[1], "space\tspace");
        assert_eq!(lines[2], "flex_bar_curve_0\tflex_bar_curve_0\tuni0048");
        assert_eq!(lines[3], "flex_bar_curve_1\tflex_bar_curve_1");
        assert_eq!(lines[4], "flex_bar_line_0\tflex_bar_line_0\tuni0068");
        assert_eq!(lines[6], "flex_stem_curve_0\tflex_stem_curve_0\tuni0056");
        assert_eq!(lines[8], "flex_stem_line_0\tflex_stem_line_0\tuni0076");
        assert_eq!(lines.len(), 2 + 4 * 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn only_four_records_carry_aliases() {
        let set = GlyphSet::generate(5).unwrap();
        let text = goadb_text(&set);
        let aliased = text.lines().filter(|l| l.contains("\tuni")).count();
        assert_eq!(aliased, 4);
    }
}
