//! Speech error types

use gatecall_common::GatecallError;
use thiserror::Error;

/// Result type for speech operations
pub type SpeechResult<T> = std::result::Result<T, SpeechError>;

/// Errors raised while preparing or playing an announcement
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Nothing was rendered for the language that should be spoken
    #[error("No announcement text to speak for {language}")]
    EmptyText {
        /// Language code the caller asked for
        language: String,
    },

    /// Rate, pitch or volume out of range
    #[error("Invalid speech settings: {0}")]
    InvalidSettings(#[from] validator::ValidationErrors),

    /// No speech engine could be opened on this system
    #[error("Speech backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The speech engine rejected a request
    #[error("Speech backend error: {0}")]
    Backend(String),
}

impl SpeechError {
    /// Wrap an engine error
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<SpeechError> for GatecallError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::InvalidSettings(source) => {
                GatecallError::speech_with_source("invalid speech settings", source)
            }
            other => GatecallError::speech(other.to_string()),
        }
    }
}
