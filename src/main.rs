//! A demonstration-typeface generator built with Rust and Linebender crates.
//!
//! Builds the Flexy Boy UFO: dummy glyphs showing different amounts of flex,
//! selectable through stylistic sets.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use flexyboy::core::cli::{BuildSettings, CliArgs};
use flexyboy::core::config_file::ConfigFile;
use flexyboy::data;
use flexyboy::font_source::glyphs::GlyphSet;

/// Generate the glyph set, assemble the font, and write the artifacts.
fn run_build(settings: BuildSettings) -> Result<()> {
    let recipe = settings.recipe;
    let set = GlyphSet::generate(recipe.max_flex)?;
    let font = recipe.assemble(&set)?;

    let ufo_path = data::save_ufo(&font, &settings.output_dir, &recipe.postscript_name())?;
    info!("Wrote {}", ufo_path.display());

    let goadb_path = data::write_goadb(&settings.output_dir, &data::goadb_text(&set))?;
    info!("Wrote {}", goadb_path.display());

    info!(
        "Generated {} glyphs across flex amounts 0..={}",
        set.glyphs.len(),
        recipe.max_flex
    );
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

fn main() {
    init_logging();
    let args = CliArgs::parse();

    if let Err(message) = args.validate() {
        eprintln!("{message}");
        std::process::exit(2);
    }

    if args.new_config {
        if let Err(error) = ConfigFile::initialize_config_directory() {
            eprintln!("Error: {error:#}");
            std::process::exit(1);
        }
        return;
    }

    let result = args.resolve().and_then(run_build);
    if let Err(error) = result {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
