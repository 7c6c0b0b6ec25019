//! Configuration loading and persistence with atomic file operations.

use crate::schema::Config;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use timephrase_common::{Result, TimephraseError};
use tracing::{debug, info, warn};

/// Supported configuration file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.yaml` or `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detects the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`TimephraseError::Config`] for missing or unknown extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(TimephraseError::Config(format!(
                "Unsupported configuration file format: {}",
                path.display()
            ))
            .into()),
        }
    }

    /// Parses configuration text in this format.
    ///
    /// # Errors
    ///
    /// Returns [`TimephraseError::Serialization`] if the text does not parse.
    pub fn parse(self, content: &str) -> Result<Config> {
        let parsed: std::result::Result<Config, String> = match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|e| TimephraseError::Serialization(e).into())
    }

    /// Renders a configuration in this format.
    ///
    /// # Errors
    ///
    /// Returns [`TimephraseError::Serialization`] if serialization fails.
    pub fn render(self, config: &Config) -> Result<String> {
        let rendered = match self {
            Self::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
            Self::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
        };

        rendered.map_err(|e| TimephraseError::Serialization(e).into())
    }
}

/// Configuration loader with atomic file operations.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from and writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates configuration from file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, does not parse, or does not validate.
    pub fn load(&self) -> Result<Config> {
        let format = ConfigFormat::from_path(&self.path)?;
        debug!("Loading configuration from {:?} as {:?}", self.path, format);

        let content = fs::read_to_string(&self.path).map_err(TimephraseError::from)?;
        let config = format.parse(&content)?;
        config.validate()?;

        info!(
            "Loaded configuration from {:?} with locale {}",
            self.path, config.locale.default_locale
        );
        Ok(config)
    }

    /// Loads configuration, using defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Fails like [`ConfigLoader::load`] when the file exists but is invalid.
    pub fn load_or_default(&self) -> Result<Config> {
        if self.path.exists() {
            self.load()
        } else {
            warn!("Configuration file {:?} not found, using defaults", self.path);
            Ok(Config::default())
        }
    }

    /// Saves configuration to file atomically.
    ///
    /// The configuration is written to a temporary file in the target
    /// directory and renamed over the destination.
    ///
    /// # Errors
    ///
    /// Fails if validation, serialization, or any file operation fails.
    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let rendered = ConfigFormat::from_path(&self.path)?.render(config)?;

        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut file = tempfile::NamedTempFile::new_in(&directory).map_err(TimephraseError::from)?;
        file.write_all(rendered.as_bytes()).map_err(TimephraseError::from)?;
        file.as_file().sync_all().map_err(TimephraseError::from)?;
        file.persist(&self.path)
            .map_err(|e| TimephraseError::Io(e.error))?;

        info!("Saved configuration to {:?}", self.path);
        Ok(())
    }
}
