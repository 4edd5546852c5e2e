//! Application configuration structures

use crate::validation::{
    validate_file_path, validate_locales_dir, validate_log_level, validate_unique_languages,
};
use gatecall_common::{Language, LoggingConfig, TemplateKind};
use gatecall_speech::{GenderPreference, SpeechSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::{Validate, ValidationErrors};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// What gets rendered
    #[validate]
    pub announcement: AnnouncementConfig,

    /// Text-to-speech playback
    #[validate]
    pub speech: SpeechConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AnnouncementConfig {
    /// Languages rendered when the command line names none
    #[validate(length(min = 1, message = "At least one announcement language must be enabled"))]
    pub languages: Vec<Language>,

    /// Template used when the command line names none
    pub default_template: TemplateKind,

    /// Directory holding `<lang>/main.ftl` overrides of the built-in scripts
    pub locales_dir: Option<PathBuf>,
}

impl Default for AnnouncementConfig {
    fn default() -> Self {
        Self {
            languages: Language::ALL.to_vec(),
            default_template: TemplateKind::default(),
            locales_dir: None,
        }
    }
}

/// Speech playback configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SpeechConfig {
    /// Whether announcements are read aloud after rendering
    pub enabled: bool,

    /// Which rendered language is read
    pub language: Language,

    /// Preferred voice gender
    pub gender: GenderPreference,

    /// Rate, pitch and volume
    #[serde(flatten)]
    #[validate]
    pub settings: SpeechSettings,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            language: Language::default(),
            gender: GenderPreference::default(),
            settings: SpeechSettings::default(),
        }
    }
}

impl Config {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()?;

        let mut errors = ValidationErrors::new();

        if let Err(err) = validate_unique_languages(&self.announcement.languages) {
            errors.add("languages", err);
        }

        if let Some(dir) = &self.announcement.locales_dir {
            if let Err(err) = validate_locales_dir(dir) {
                errors.add("locales_dir", err);
            }
        }

        let settings = &self.speech.settings;
        if ![settings.rate, settings.pitch, settings.volume]
            .iter()
            .all(|value| value.is_finite())
        {
            errors.add("speech", validator::ValidationError::new("not_finite"));
        }

        if let Err(err) = validate_log_level(&self.logging.level) {
            errors.add("level", err);
        }

        if let Some(path) = &self.logging.file_path {
            if let Err(err) = validate_file_path(path) {
                errors.add("file_path", err);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
