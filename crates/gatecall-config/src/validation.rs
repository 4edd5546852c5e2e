//! Checks the `validator` derives cannot express

use gatecall_common::Language;
use std::collections::HashSet;
use std::path::Path;
use validator::ValidationError;

/// Log levels accepted in the configuration file
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validate a log level name
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

/// Reject a language listed twice
pub fn validate_unique_languages(languages: &[Language]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    if languages.iter().all(|language| seen.insert(*language)) {
        Ok(())
    } else {
        Err(ValidationError::new("duplicate_language"))
    }
}

/// A locale override directory must exist
pub fn validate_locales_dir(dir: &Path) -> Result<(), ValidationError> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(ValidationError::new("locales_dir_not_found"))
    }
}

/// Validate file path (basic check for valid path characters)
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::new("empty_file_path"));
    }

    // Colon stays allowed for Windows drive letters
    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(ValidationError::new("invalid_file_path_characters"));
    }

    Ok(())
}
