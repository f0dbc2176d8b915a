//! Configuration system

use std::path::{Path, PathBuf};

pub use serde::{Deserialize, Serialize};

use crate::render::DEFAULT_COMMAND_CAPACITY;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Format is picked by extension
        match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            ConfigFormat::Ron => {
                ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Plain-data driver settings that can live in a config file
///
/// Fonts and in-memory textures cannot be serialized; those are set on
/// [`DriverOptions`](crate::DriverOptions) directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Multipliers applied to raw wheel deltas (X, Y)
    pub scroll_multiplier: [f64; 2],

    /// Pixel offset applied when drawing with the default font
    pub default_font_offset: [i32; 2],

    /// Commands reserved up front in the per-frame buffer
    pub command_capacity: usize,

    /// Atlas image loaded from disk instead of the embedded default
    pub atlas_path: Option<PathBuf>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            scroll_multiplier: [1.0, -30.0],
            default_font_offset: [0, 0],
            command_capacity: DEFAULT_COMMAND_CAPACITY,
            atlas_path: None,
        }
    }
}

impl Config for DriverConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ui_bridge_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_default_scroll_multiplier() {
        let config = DriverConfig::default();
        assert_eq!(config.scroll_multiplier, [1.0, -30.0]);
        assert_eq!(config.command_capacity, 4096);
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("driver.toml");
        let config = DriverConfig {
            scroll_multiplier: [2.0, -15.0],
            default_font_offset: [0, 12],
            command_capacity: 512,
            atlas_path: Some(PathBuf::from("assets/ui_atlas.png")),
        };

        config.save_to_file(&path).unwrap();
        let loaded = DriverConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let path = temp_path("driver.ron");
        let config = DriverConfig {
            default_font_offset: [1, 2],
            ..DriverConfig::default()
        };

        config.save_to_file(&path).unwrap();
        let loaded = DriverConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "command_capacity = 64\n").unwrap();
        let loaded = DriverConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.command_capacity, 64);
        assert_eq!(loaded.scroll_multiplier, [1.0, -30.0]);
        assert!(loaded.atlas_path.is_none());
    }

    #[test]
    fn test_unsupported_extension() {
        let result = DriverConfig::default().save_to_file(temp_path("driver.json"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_parse_error() {
        let path = temp_path("broken.toml");
        std::fs::write(&path, "command_capacity = \"lots\"\n").unwrap();
        let result = DriverConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
