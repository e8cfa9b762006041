use serde::{Deserialize, Serialize};
use speech_outline_engine::{Direction, MindMapOptions, WrapWidths};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding speech outlines, used to resolve relative file arguments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speeches_path: Option<PathBuf>,
    #[serde(default)]
    pub mind_map: MindMapConfig,
}

/// Mind-map rendering defaults. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MindMapConfig {
    pub direction: Direction,
    pub root_wrap: usize,
    pub sub_point_wrap: usize,
    pub detail_wrap: usize,
    pub content_wrap: usize,
}

impl Default for MindMapConfig {
    fn default() -> Self {
        let wrap = WrapWidths::default();
        Self {
            direction: Direction::default(),
            root_wrap: wrap.root,
            sub_point_wrap: wrap.sub_point,
            detail_wrap: wrap.detail,
            content_wrap: wrap.content,
        }
    }
}

impl MindMapConfig {
    /// Generator options, with `direction` overriding the configured one when given.
    pub fn options(&self, direction: Option<Direction>) -> MindMapOptions {
        MindMapOptions {
            direction: direction.unwrap_or(self.direction),
            wrap: WrapWidths {
                root: self.root_wrap,
                sub_point: self.sub_point_wrap,
                detail: self.detail_wrap,
                content: self.content_wrap,
            },
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded speeches path
        config.speeches_path = config
            .speeches_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/speech-outline");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Resolves a speech file argument against `speeches_path` when it is relative.
    pub fn resolve_speech_path(&self, path: &Path) -> PathBuf {
        match &self.speeches_path {
            Some(root) if path.is_relative() && !path.exists() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
