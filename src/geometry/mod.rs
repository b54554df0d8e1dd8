//! Geometric primitives and the flex outline engine

pub mod flex;

// Re-export commonly used items
pub use flex::{
    bar_outline, flex_outline, stem_outline, Archetype, FlexAmount, FlexAxis, GlyphKey,
    RenderStyle, MAX_FLEX_LIMIT,
};
