//! Configuration file handling for asciify.
//!
//! A TOML file passed with `--config` can preset render options. No default
//! location is searched.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::DEFAULT_CHAR_ASPECT_RATIO;

/// Configuration file structure for asciify.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Reverse the glyph ramp (for dark terminals)
    #[serde(default)]
    pub invert: bool,
    /// Emit 24-bit color escapes
    #[serde(default)]
    pub color: bool,
    /// Terminal cell height / width
    #[serde(default)]
    pub char_aspect: Option<f32>,
}

impl Config {
    /// Load configuration from an explicitly given file. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                let config = Self::load(p)?;
                log::debug!("Loaded config from {}: {:?}", p.display(), config);
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Character aspect ratio, falling back to the default.
    pub fn char_aspect(&self) -> f32 {
        self.render.char_aspect.unwrap_or(DEFAULT_CHAR_ASPECT_RATIO)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}
