//! Data conversion and build-artifact output

pub mod conversions;
pub mod goadb;
pub mod ufo;

// Re-export commonly used items
pub use goadb::goadb_text;
pub use ufo::{load_ufo_from_path, save_ufo, write_goadb};
