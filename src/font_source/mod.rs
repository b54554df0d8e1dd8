//! Glyph generation and font assembly
//!
//! Turns (archetype, style, flex) keys into generated glyph records and
//! collects them into a UFO font with ordering, metrics, and stylistic-set
//! feature text.

pub mod assembler;
pub mod features;
pub mod glyphs;

// Re-export commonly used items
pub use assembler::FontRecipe;
pub use features::{feature_file_text, stylistic_set};
pub use glyphs::{GeneratedGlyph, GlyphSet};
