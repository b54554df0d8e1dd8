//! Stylistic-set feature text
//!
//! Emits the OpenType feature source that maps each unflexed base glyph to
//! its flexed variants. One `ss{N:02}` block per flex level; the block text
//! is a pure transform over the glyph-name space and never touches outline
//! geometry.

use crate::geometry::flex::FlexAmount;

/// Base glyph names, in the order the substitution rules are written.
const BASE_GLYPH_NAMES: [&str; 4] = [
    "flex_stem_curve",
    "flex_stem_line",
    "flex_bar_curve",
    "flex_bar_line",
];

/// Build a single `ssXX` feature block for one flex level.
pub fn stylistic_set(flex_index: FlexAmount) -> String {
    let feature_name = format!("ss{flex_index:02}");

    let mut lines = vec![format!("feature {feature_name} {{")];
    for base in BASE_GLYPH_NAMES {
        lines.push(format!("\tsub {base}_0 by {base}_{flex_index};"));
    }
    lines.push(format!("}} {feature_name};\n"));
    lines.join("\n")
}

/// Full feature file text: languagesystem prologue plus one stylistic set
/// per flex level `1..=max_flex`.
pub fn feature_file_text(max_flex: FlexAmount) -> String {
    let mut text = String::from("languagesystem DFLT dflt;\nlanguagesystem latn dflt;\n");
    for flex_index in 1..=max_flex {
        text.push_str(&stylistic_set(flex_index));
    }
    text
}
