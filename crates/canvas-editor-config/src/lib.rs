use serde::{Deserialize, Serialize};
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Canvas file opened when no path is given on the command line
    pub canvas_path: PathBuf,
    /// Write the canvas back to disk after every change
    #[serde(default = "default_autosave")]
    pub autosave: bool,
}

fn default_autosave() -> bool {
    true
}

impl Config {
    pub fn new(canvas_path: impl Into<PathBuf>) -> Self {
        Self {
            canvas_path: canvas_path.into(),
            autosave: default_autosave(),
        }
    }

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

        // Expand shell variables and tilde in the loaded canvas path
        config.canvas_path = Self::expand_path(&config.canvas_path).unwrap_or(config.canvas_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Load the config, writing a default one pointing at
    /// [`Config::default_canvas_path`] when none exists yet
    pub fn load_or_init_from_path<P: AsRef<Path>>(config_path: P) -> anyhow::Result<Self> {
        let config_path = config_path.as_ref();
        if let Some(config) = Self::load_from_path(config_path)? {
            return Ok(config);
        }

        let config = Self::new(Self::default_canvas_path());
        config.save_to_path(config_path)?;
        Ok(config)
    }

    pub fn load_or_init() -> anyhow::Result<Self> {
        let config_path = Self::config_path();
        Self::load_or_init_from_path(&config_path)
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

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/canvas-editor");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn default_canvas_path() -> PathBuf {
        let canvas_dir = shellexpand::tilde("~/canvas-editor");
        PathBuf::from(canvas_dir.as_ref()).join("canvas.json")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
