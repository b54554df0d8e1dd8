//! Command line interface for the Flexy Boy generator
//!
//! Handles parsing command line arguments and provides validation for user
//! inputs before the build runs.
//!
//! Examples:
//!   flexyboy                         # Build with defaults (max flex 5)
//!   flexyboy --max-flex 8            # Generate variants up to 8 units
//!   flexyboy --out dist              # Write artifacts to dist/
//!   flexyboy --settings my.json      # Take build defaults from a file

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::core::config_file::ConfigFile;
use crate::core::errors::FlexyResult;
use crate::font_source::assembler::FontRecipe;
use crate::geometry::flex::MAX_FLEX_LIMIT;

/// Flexy Boy CLI arguments
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "flexyboy",
    version,
    about = "Procedurally generates the Flexy Boy demonstration typeface",
    long_about = "Flexy Boy is a demonstration typeface whose glyphs encode a parametric flex amount. The generator builds a UFO font package containing a vertical stem and a horizontal bar in curved and straight renditions, one variant per flex level, wired up through ss01..ssNN stylistic sets, plus the matching GlyphOrderAndAliasDB file."
)]
pub struct CliArgs {
    /// Maximum flex amount to generate variants for
    ///
    /// One stylistic set is emitted per level from 1 up to this value.
    #[clap(
        long = "max-flex",
        short = 'm',
        help = "Maximum flex amount (design units)",
        long_help = "Maximum flex amount in design units. Variants are generated for every amount from 0 (the encoded base glyphs) up to this value, each selectable through its ssNN stylistic set."
    )]
    pub max_flex: Option<u32>,

    /// Directory to write the UFO and GlyphOrderAndAliasDB into
    #[clap(
        long = "out",
        short = 'o',
        help = "Output directory (default: build)",
        long_help = "Directory the UFO package and the GlyphOrderAndAliasDB file are written into. Created if it does not exist."
    )]
    pub output_dir: Option<PathBuf>,

    /// Family name for the generated font
    #[clap(long = "family", help = "Family name (default: Flexy Boy)")]
    pub family_name: Option<String>,

    /// Style name for the generated font
    #[clap(long = "style", help = "Style name (default: Regular)")]
    pub style_name: Option<String>,

    /// Path to a JSON settings file with build defaults
    ///
    /// CLI arguments override values from the file.
    #[clap(
        long = "settings",
        short = 's',
        help = "Settings file with build defaults",
        long_help = "Path to a JSON settings file providing build defaults (family_name, style_name, max_flex, output_dir). Command line arguments take precedence over file values."
    )]
    pub settings: Option<PathBuf>,

    /// Initialize the user configuration directory
    ///
    /// This creates ~/.config/flexyboy/settings.json with the built-in
    /// defaults so they can be customized without command line arguments.
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with a settings file"
    )]
    pub new_config: bool,
}

/// Fully resolved build settings: recipe plus output location.
#[derive(Debug, Clone)]
pub struct BuildSettings {
    pub recipe: FontRecipe,
    pub output_dir: PathBuf,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This catches out-of-range values and missing files before the build
    /// starts, providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(max_flex) = self.max_flex {
            if max_flex > MAX_FLEX_LIMIT {
                return Err(format!(
                    "Maximum flex amount {max_flex} is out of range.\nThe engine supports 0..={MAX_FLEX_LIMIT}; beyond that the stem's sides would cross."
                ));
            }
        }

        if let Some(path) = &self.settings {
            if !path.exists() {
                return Err(format!(
                    "Settings file does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
        }

        if let Some(family) = &self.family_name {
            if family.trim().is_empty() {
                return Err("Family name must not be empty.".to_string());
            }
        }

        Ok(())
    }

    /// Resolve the final build settings
    ///
    /// Priority order:
    /// 1. CLI argument
    /// 2. Settings file (--settings path, or ~/.config/flexyboy/settings.json)
    /// 3. Built-in default
    pub fn resolve(&self) -> FlexyResult<BuildSettings> {
        let config = match &self.settings {
            Some(path) => Some(ConfigFile::load_from(path)?),
            None => ConfigFile::load(),
        };
        let config = config.unwrap_or_default();

        let defaults = FontRecipe::default();
        let recipe = FontRecipe {
            family_name: self
                .family_name
                .clone()
                .or(config.family_name)
                .unwrap_or(defaults.family_name),
            style_name: self
                .style_name
                .clone()
                .or(config.style_name)
                .unwrap_or(defaults.style_name),
            max_flex: self
                .max_flex
                .or(config.max_flex)
                .unwrap_or(defaults.max_flex),
        };
        let output_dir = self
            .output_dir
            .clone()
            .or(config.output_dir)
            .unwrap_or_else(|| PathBuf::from("build"));

        debug!(
            "Resolved build settings: {} max flex {} -> {:?}",
            recipe.postscript_name(),
            recipe.max_flex,
            output_dir
        );
        Ok(BuildSettings { recipe, output_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_args() -> CliArgs {
        CliArgs {
            max_flex: None,
            output_dir: None,
            family_name: None,
            style_name: None,
            settings: None,
            new_config: false,
        }
    }

    #[test]
    fn out_of_range_max_flex_fails_validation() {
        let args = CliArgs {
            max_flex: Some(MAX_FLEX_LIMIT + 1),
            ..bare_args()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn missing_settings_file_fails_validation() {
        let args = CliArgs {
            settings: Some(PathBuf::from("/nonexistent/settings.json")),
            ..bare_args()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn cli_values_override_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "max_flex": 3, "family_name": "From File" }"#).unwrap();

        let args = CliArgs {
            max_flex: Some(7),
            settings: Some(path),
            ..bare_args()
        };
        let settings = args.resolve().unwrap();
        assert_eq!(settings.recipe.max_flex, 7);
        assert_eq!(settings.recipe.family_name, "From File");
        assert_eq!(settings.recipe.style_name, "Regular");
        assert_eq!(settings.output_dir, PathBuf::from("build"));
    }
}
