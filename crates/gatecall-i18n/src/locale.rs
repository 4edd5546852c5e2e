//! Mapping between [`Language`] and Fluent locale identifiers

use crate::error::{I18nError, I18nResult};
use gatecall_common::Language;
use unic_langid::LanguageIdentifier;

/// Convert to a Fluent `LanguageIdentifier`
pub fn language_identifier(language: Language) -> I18nResult<LanguageIdentifier> {
    language
        .code()
        .parse()
        .map_err(|_| I18nError::InvalidLanguageId(language.code().to_string()))
}

/// Relative path of a language's resource file inside a locales directory
pub fn resource_file(language: Language) -> String {
    format!("{}/main.ftl", language.short_code())
}
