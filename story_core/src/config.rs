//! Run configuration, read from an optional TOML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, StoryError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    pub paths: PathsConfig,
    pub story: StorySettings,
}

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub match_events: PathBuf,
    pub home_squad: PathBuf,
    pub away_squad: PathBuf,
    pub asset_descriptions: PathBuf,
    /// Created on first save.
    pub out_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            match_events: PathBuf::from("data/match_events.json"),
            home_squad: PathBuf::from("data/celtic-squad.json"),
            away_squad: PathBuf::from("data/kilmarnock-squad.json"),
            asset_descriptions: PathBuf::from("assets/asset_descriptions.json"),
            out_dir: PathBuf::from("out"),
        }
    }
}

/// Story shape and the image references written into pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorySettings {
    /// Highlight pages to keep when the caller does not say.
    pub top_n: usize,
    /// Value of the story's `source` field.
    pub source: String,
    pub asset_root: String,
    pub cover_image: String,
    pub placeholder_image: String,
}

impl Default for StorySettings {
    fn default() -> Self {
        Self {
            top_n: 7,
            source: "../data/match_events.json".to_string(),
            asset_root: "../assets".to_string(),
            cover_image: "../assets/cover.jpg".to_string(),
            placeholder_image: "../assets/placeholder.png".to_string(),
        }
    }
}

impl StoryConfig {
    /// Parse configuration text; missing keys take their defaults.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| StoryError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| StoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Read `path` when given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoryConfig::default();
        assert_eq!(config.story.top_n, 7);
        assert_eq!(config.paths.out_dir, PathBuf::from("out"));
        assert_eq!(config.story.placeholder_image, "../assets/placeholder.png");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let text = r#"
            [story]
            top_n = 3

            [paths]
            match_events = "fixtures/derby.json"
        "#;
        let config = StoryConfig::from_toml_str(text, Path::new("inline.toml")).unwrap();

        assert_eq!(config.story.top_n, 3);
        assert_eq!(config.story.source, "../data/match_events.json");
        assert_eq!(config.paths.match_events, PathBuf::from("fixtures/derby.json"));
        assert_eq!(config.paths.home_squad, PathBuf::from("data/celtic-squad.json"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = StoryConfig::from_toml_str("[story]\ntop_n = \"many\"", Path::new("bad.toml"))
            .unwrap_err();
        assert!(matches!(err, StoryError::Config { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(StoryConfig::load_or_default(None).unwrap(), StoryConfig::default());
    }
}
