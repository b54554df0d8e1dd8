//! User configuration file handling
//!
//! Manages build defaults from ~/.config/flexyboy/settings.json, or from an
//! explicit settings file passed on the command line.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::errors::{FlexyContext, FlexyResult};

/// Build defaults from a settings file
///
/// These settings override built-in defaults but are overridden by CLI
/// arguments.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Family name to build with (default "Flexy Boy")
    pub family_name: Option<String>,
    /// Style name to build with (default "Regular")
    pub style_name: Option<String>,
    /// Maximum flex amount to generate variants for (default 5)
    pub max_flex: Option<u32>,
    /// Directory the UFO and GlyphOrderAndAliasDB are written to
    pub output_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("flexyboy").join("settings.json")
    }

    /// Load configuration from the default user config file
    pub fn load() -> Option<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    /// Load configuration from an explicit settings file. Unlike the default
    /// location, an unreadable explicit file is an error.
    pub fn load_from(path: &Path) -> FlexyResult<Self> {
        let contents = fs::read_to_string(path).with_file_context("read", path)?;
        let config = serde_json::from_str(&contents).with_file_context("parse", path)?;
        debug!("Loaded settings from {:?}", path);
        Ok(config)
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> FlexyResult<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_file_context("create directory", parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents).with_file_context("write", &path)?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Initialize the user configuration directory with a settings.json
    /// holding the built-in defaults, ready to edit.
    pub fn initialize_config_directory() -> FlexyResult<()> {
        let settings_path = Self::config_path();
        if settings_path.exists() {
            println!("Settings file already exists: {:?}", settings_path);
            return Ok(());
        }

        let example = ConfigFile {
            family_name: Some("Flexy Boy".to_string()),
            style_name: Some("Regular".to_string()),
            max_flex: Some(5),
            output_dir: Some(PathBuf::from("build")),
        };
        example.save()?;
        println!("Created settings file: {:?}", settings_path);
        Ok(())
    }
}
