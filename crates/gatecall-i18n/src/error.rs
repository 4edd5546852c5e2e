//! Error types for announcement catalog operations

use gatecall_common::GatecallError;
use thiserror::Error;

/// Errors that can occur while building or querying the announcement catalog
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Failed to load a resource file
    #[error("Failed to load resource file: {path}")]
    ResourceLoadError {
        /// File that could not be read
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a Fluent resource
    #[error("Failed to parse Fluent resource {origin}: {errors:?}")]
    FluentParseError {
        /// Built-in resource name or file path
        origin: String,
        /// Parser diagnostics
        errors: Vec<String>,
    },

    /// No bundle has been loaded for the language
    #[error("No announcement catalog loaded for locale {locale}")]
    MissingBundle {
        /// Language tag
        locale: String,
    },

    /// Message not found in the language's bundle
    #[error("Message not found: {key} ({locale})")]
    MessageNotFound {
        /// Message id
        key: String,
        /// Language tag
        locale: String,
    },

    /// Failed to format a message
    #[error("Failed to format message '{key}': {errors:?}")]
    MessageFormatError {
        /// Message id
        key: String,
        /// Resolver diagnostics
        errors: Vec<String>,
    },

    /// Adding a resource to a bundle failed
    #[error("Failed to add resource to bundle for locale {locale}: {errors:?}")]
    BundleCreationError {
        /// Language tag
        locale: String,
        /// Conflicting entries reported by Fluent
        errors: Vec<String>,
    },
}

/// Result type for catalog operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for GatecallError {
    fn from(err: I18nError) -> Self {
        match &err {
            I18nError::MissingBundle { locale }
            | I18nError::MessageNotFound { locale, .. }
            | I18nError::BundleCreationError { locale, .. } => {
                Self::localization_with_locale(err.to_string(), locale.clone())
            }
            _ => Self::localization(err.to_string()),
        }
    }
}
