//! Configuration loading utilities

use crate::Config;
use gatecall_common::{GatecallError, Language, TemplateKind};
use gatecall_speech::GenderPreference;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "GATECALL_CONFIG_PATH";

/// Files looked for in the working directory, in order
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["gatecall.yaml", "gatecall.yml", "gatecall.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file '{path}': {source}")]
    IoError {
        /// File that could not be read
        path: String,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Underlying cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// File extension is neither YAML nor TOML
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),
}

impl From<ConfigError> for GatecallError {
    fn from(err: ConfigError) -> Self {
        GatecallError::config(err.to_string())
    }
}

/// Configuration file syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl ConfigFormat {
    /// Format implied by a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| ConfigError::EnvParseError {
        var: var.to_string(),
        source: Box::new(e),
    })
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML or TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.display().to_string(),
            source,
        })?;

        let mut config = Self::parse(&content, format)?;
        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration text without applying overrides or validation
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
        match format {
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            ConfigFormat::Toml => Ok(toml::from_str(content)?),
        }
    }

    /// Find the configuration file to use.
    ///
    /// An explicit path wins, then `GATECALL_CONFIG_PATH`, then the first of
    /// [`DEFAULT_CONFIG_FILES`] present in the working directory.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists())
    }

    /// Load configuration from the located file, or defaults when there is none
    pub fn load(explicit: Option<&Path>) -> gatecall_common::Result<Config> {
        match Self::locate(explicit) {
            Some(path) => Ok(Self::load_config(path)?),
            None => {
                debug!("No configuration file found, using defaults");
                Ok(Self::load_defaults()?)
            }
        }
    }

    /// Defaults with environment overrides applied
    pub fn load_defaults() -> Result<Config, ConfigError> {
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Apply `GATECALL_*` environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides read through `lookup` instead of the process environment
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Announcement overrides
        if let Some(languages) = lookup("GATECALL_LANGUAGES") {
            config.announcement.languages = languages
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(|code| parse_var::<Language>("GATECALL_LANGUAGES", code))
                .collect::<Result<_, _>>()?;
        }

        if let Some(template) = lookup("GATECALL_DEFAULT_TEMPLATE") {
            config.announcement.default_template =
                parse_var::<TemplateKind>("GATECALL_DEFAULT_TEMPLATE", &template)?;
        }

        if let Some(dir) = lookup("GATECALL_LOCALES_DIR") {
            config.announcement.locales_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }

        // Speech overrides
        if let Some(enabled) = lookup("GATECALL_SPEECH_ENABLED") {
            config.speech.enabled = parse_var("GATECALL_SPEECH_ENABLED", &enabled)?;
        }

        if let Some(language) = lookup("GATECALL_SPEECH_LANGUAGE") {
            config.speech.language = parse_var::<Language>("GATECALL_SPEECH_LANGUAGE", &language)?;
        }

        if let Some(gender) = lookup("GATECALL_SPEECH_GENDER") {
            config.speech.gender = parse_var::<GenderPreference>("GATECALL_SPEECH_GENDER", &gender)?;
        }

        if let Some(rate) = lookup("GATECALL_SPEECH_RATE") {
            config.speech.settings.rate = parse_var("GATECALL_SPEECH_RATE", &rate)?;
        }

        if let Some(pitch) = lookup("GATECALL_SPEECH_PITCH") {
            config.speech.settings.pitch = parse_var("GATECALL_SPEECH_PITCH", &pitch)?;
        }

        if let Some(volume) = lookup("GATECALL_SPEECH_VOLUME") {
            config.speech.settings.volume = parse_var("GATECALL_SPEECH_VOLUME", &volume)?;
        }

        // Logging overrides
        if let Some(level) = lookup("GATECALL_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(json) = lookup("GATECALL_LOG_JSON") {
            config.logging.json_format = parse_var("GATECALL_LOG_JSON", &json)?;
        }

        if let Some(file) = lookup("GATECALL_LOG_FILE") {
            config.logging.file_path = (!file.is_empty()).then_some(file);
        }

        Ok(())
    }
}
