//! Built-in and operator supplied Fluent resources

use crate::error::{I18nError, I18nResult};
use crate::locale::resource_file;
use fluent_bundle::FluentResource;
use gatecall_common::Language;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

const BUILTIN_ES: &str = include_str!("../locales/es/main.ftl");
const BUILTIN_EN: &str = include_str!("../locales/en/main.ftl");
const BUILTIN_PT: &str = include_str!("../locales/pt/main.ftl");

/// Source text of the announcement scripts compiled into the crate
pub const fn builtin_source(language: Language) -> &'static str {
    match language {
        Language::Spanish => BUILTIN_ES,
        Language::English => BUILTIN_EN,
        Language::Portuguese => BUILTIN_PT,
    }
}

/// Parse Fluent source; `origin` names it in error messages
pub fn parse_resource(source: String, origin: &str) -> I18nResult<FluentResource> {
    FluentResource::try_new(source).map_err(|(_, errors)| {
        let error_messages: Vec<String> = errors.into_iter().map(|e| format!("{e:?}")).collect();

        error!("Failed to parse Fluent resource {}: {:?}", origin, error_messages);

        I18nError::FluentParseError {
            origin: origin.to_string(),
            errors: error_messages,
        }
    })
}

/// Parse the built-in resource for a language
pub fn load_builtin(language: Language) -> I18nResult<FluentResource> {
    parse_resource(
        builtin_source(language).to_string(),
        &format!("builtin:{}", resource_file(language)),
    )
}

/// Loads operator supplied overrides from `<base_dir>/<lang>/main.ftl`
#[derive(Debug, Clone)]
pub struct ResourceManager {
    base_dir: PathBuf,
}

impl ResourceManager {
    /// Create a new ResourceManager
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Path the override for `language` would be read from
    pub fn resource_path(&self, language: Language) -> PathBuf {
        self.base_dir.join(resource_file(language))
    }

    /// Load the override for a language, or `None` when no file exists
    pub fn load_override(&self, language: Language) -> I18nResult<Option<FluentResource>> {
        let resource_path = self.resource_path(language);

        if !resource_path.exists() {
            debug!("No override resource at {:?}", resource_path);
            return Ok(None);
        }

        let content =
            fs::read_to_string(&resource_path).map_err(|source| I18nError::ResourceLoadError {
                path: resource_path.to_string_lossy().to_string(),
                source,
            })?;

        let resource = parse_resource(content, &resource_path.to_string_lossy())?;

        info!("Loaded override resource for locale: {}", language.code());
        Ok(Some(resource))
    }

    /// Get the base directory for resources
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
