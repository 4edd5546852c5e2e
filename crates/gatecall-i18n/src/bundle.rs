//! FluentBundle management and message formatting

use crate::error::{I18nError, I18nResult};
use crate::locale::language_identifier;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use gatecall_common::Language;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Bundle type shared across threads once built
type Bundle = FluentBundle<FluentResource>;

/// Manages one FluentBundle per announcement language
pub struct BundleManager {
    bundles: HashMap<Language, Bundle>,
}

impl std::fmt::Debug for BundleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleManager")
            .field("languages", &self.available_languages())
            .finish()
    }
}

impl BundleManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            bundles: HashMap::new(),
        }
    }

    fn bundle_mut(&mut self, language: Language) -> I18nResult<&mut Bundle> {
        if !self.bundles.contains_key(&language) {
            let lang_id = language_identifier(language)?;
            let mut bundle = FluentBundle::new_concurrent(vec![lang_id]);
            // Isolation marks would end up in the spoken text
            bundle.set_use_isolating(false);
            self.bundles.insert(language, bundle);
        }

        self.bundles
            .get_mut(&language)
            .ok_or_else(|| I18nError::MissingBundle {
                locale: language.code().to_string(),
            })
    }

    /// Add a resource to a language's bundle; duplicate ids are an error
    pub fn add_resource(&mut self, language: Language, resource: FluentResource) -> I18nResult<()> {
        self.bundle_mut(language)?
            .add_resource(resource)
            .map_err(|errors| I18nError::BundleCreationError {
                locale: language.code().to_string(),
                errors: errors.into_iter().map(|e| format!("{e:?}")).collect(),
            })?;

        debug!("Added resource to bundle for locale: {}", language.code());
        Ok(())
    }

    /// Add a resource whose entries replace any existing ones with the same id
    pub fn add_resource_overriding(
        &mut self,
        language: Language,
        resource: FluentResource,
    ) -> I18nResult<()> {
        self.bundle_mut(language)?.add_resource_overriding(resource);
        debug!("Applied override resource for locale: {}", language.code());
        Ok(())
    }

    /// Format a message with the given arguments
    pub fn format_message(
        &self,
        language: Language,
        message_id: &str,
        args: Option<&FluentArgs>,
    ) -> I18nResult<String> {
        let bundle = self
            .bundles
            .get(&language)
            .ok_or_else(|| I18nError::MissingBundle {
                locale: language.code().to_string(),
            })?;

        let pattern = bundle
            .get_message(message_id)
            .and_then(|message| message.value())
            .ok_or_else(|| I18nError::MessageNotFound {
                key: message_id.to_string(),
                locale: language.code().to_string(),
            })?;

        let mut errors = Vec::new();
        let formatted = bundle.format_pattern(pattern, args, &mut errors);

        if !errors.is_empty() {
            let error_messages: Vec<String> = errors.into_iter().map(|e| format!("{e:?}")).collect();
            warn!(
                "Formatting errors for message '{}': {:?}",
                message_id, error_messages
            );
            return Err(I18nError::MessageFormatError {
                key: message_id.to_string(),
                errors: error_messages,
            });
        }

        Ok(formatted.into_owned())
    }

    /// Check if a message exists in the bundle
    pub fn has_message(&self, language: Language, message_id: &str) -> bool {
        self.bundles
            .get(&language)
            .is_some_and(|bundle| bundle.has_message(message_id))
    }

    /// Languages with a loaded bundle, in output slot order
    pub fn available_languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|language| self.bundles.contains_key(language))
            .collect()
    }
}

impl Default for BundleManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to create FluentArgs more easily
#[macro_export]
macro_rules! fluent_args {
    () => {
        None
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::FluentArgs::new();
        $(
            args.set($key, $value);
        )+
        Some(args)
    }};
}
