//! UFO and build-artifact file I/O

use anyhow::Result;
use norad::Font;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::errors::FlexyContext;

/// Load a UFO font file from disk.
pub fn load_ufo_from_path(path: impl AsRef<Path>) -> Result<Font> {
    let font = Font::load(path)?;
    Ok(font)
}

/// Save a font as `<file_stem>.ufo` inside `output_dir`, creating the
/// directory if needed. Returns the path written.
pub fn save_ufo(font: &Font, output_dir: &Path, file_stem: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).with_file_context("create directory", output_dir)?;
    let path = output_dir.join(format!("{file_stem}.ufo"));
    font.save(&path).with_file_context("save UFO", &path)?;
    debug!("Wrote {}", path.display());
    Ok(path)
}

/// Write the GlyphOrderAndAliasDB next to the UFO. Returns the path written.
pub fn write_goadb(output_dir: &Path, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).with_file_context("create directory", output_dir)?;
    let path = output_dir.join("GlyphOrderAndAliasDB");
    fs::write(&path, text).with_file_context("write", &path)?;
    debug!("Wrote {}", path.display());
    Ok(path)
}
