//! Error types and utilities for Gatecall

use thiserror::Error;

/// Result type alias for Gatecall operations
pub type Result<T> = std::result::Result<T, GatecallError>;

/// Main error type for Gatecall operations
#[derive(Error, Debug)]
pub enum GatecallError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internationalization and localization errors
    #[error("Localization error: {message}")]
    Localization {
        /// Human readable description
        message: String,
        /// Language the failure relates to, if any
        locale: Option<String>,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Speech synthesis and playback errors
    #[error("Speech error: {message}")]
    Speech {
        /// Human readable description
        message: String,
        /// Underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for operator input
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },
}

impl GatecallError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error
    pub fn localization(msg: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: None,
            source: None,
        }
    }

    /// Create a new localization error with locale
    pub fn localization_with_locale(msg: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: Some(locale.into()),
            source: None,
        }
    }

    /// Create a new speech error
    pub fn speech(msg: impl Into<String>) -> Self {
        Self::Speech {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new speech error with source
    pub fn speech_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Speech {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Whether the error was caused by operator input rather than the environment
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Config { .. })
    }
}
