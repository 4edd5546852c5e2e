//! Announcement rendering.
//!
//! Every (template, language) pair maps to one Fluent message. The renderer
//! computes the spoken pieces (flight number, gate clause, group list,
//! destination) and hands them to that message as arguments.

use crate::bundle::BundleManager;
use crate::error::{I18nError, I18nResult};
use crate::fluent_args;
use crate::gates::gate_sentence;
use crate::groups::build_group_phrase;
use crate::numerals::{spell_digits, spell_ordinal_gate};
use crate::resource::{load_builtin, ResourceManager};
use gatecall_common::{AnnouncementRequest, Language, RenderedOutput, TemplateKind};
use once_cell::sync::Lazy;
use std::path::Path;
use tracing::{debug, info, warn};

/// Message holding the generic phrase used when no destination was given.
const DESTINATION_FALLBACK_ID: &str = "destination-fallback";

/// Used only if a catalog lacks `destination-fallback`.
const DESTINATION_FALLBACK: &str = "su destino";

/// Selector values understood by the scripts' `$groups` and `$gate` variants.
const PRESENT: &str = "some";
const ABSENT: &str = "none";

/// Renders announcement scripts from a catalog of Fluent messages
#[derive(Debug)]
pub struct AnnouncementRenderer {
    bundles: BundleManager,
}

impl AnnouncementRenderer {
    /// Renderer over the built-in scripts
    pub fn new() -> I18nResult<Self> {
        let mut bundles = BundleManager::new();
        for language in Language::ALL {
            bundles.add_resource(language, load_builtin(language)?)?;
        }
        debug!("Announcement catalog built for {} languages", Language::ALL.len());
        Ok(Self { bundles })
    }

    /// Built-in scripts with per-language overrides from `<dir>/<lang>/main.ftl`.
    ///
    /// Entries in an override file replace the built-in entry with the same id,
    /// so a file holding only `-airline = ...` rebrands every script. Languages
    /// without a file keep the built-in scripts.
    pub fn with_overrides<P: AsRef<Path>>(locales_dir: P) -> I18nResult<Self> {
        let mut renderer = Self::new()?;
        let resources = ResourceManager::new(locales_dir);

        for language in Language::ALL {
            if let Some(resource) = resources.load_override(language)? {
                renderer.bundles.add_resource_overriding(language, resource)?;
            }
        }

        info!("Announcement catalog loaded with overrides from {:?}", resources.base_dir());
        Ok(renderer)
    }

    /// Render one announcement.
    ///
    /// Never fails: a template the catalog has no script for renders as an
    /// empty string.
    pub fn render(
        &self,
        language: Language,
        template: TemplateKind,
        request: &AnnouncementRequest,
    ) -> String {
        self.try_render(language, template, request)
            .unwrap_or_else(|err| {
                debug!("Rendering {} in {} produced no text: {}", template, language, err);
                String::new()
            })
    }

    /// Render one announcement, reporting a missing or broken script as an error.
    pub fn try_render(
        &self,
        language: Language,
        template: TemplateKind,
        request: &AnnouncementRequest,
    ) -> I18nResult<String> {
        let Some(message_id) = template.message_id() else {
            return Ok(request.free_text.clone());
        };

        let flight = spell_digits(request.flight_number_or_placeholder(), language);
        let destination = self.destination(language, request);
        let gate_clause = gate_sentence(language, &request.gate, &request.secondary_gate);
        let groups = build_group_phrase(request.groups.iter().copied());
        let group_list = groups
            .as_ref()
            .map(|phrase| phrase.get(language).to_string())
            .unwrap_or_default();
        let gate_words = spell_ordinal_gate(&request.gate, language);

        let args = fluent_args![
            "flight" => flight,
            "destination" => destination,
            "gate_clause" => gate_clause,
            "groups" => if groups.is_some() { PRESENT } else { ABSENT },
            "group_list" => group_list,
            "gate" => if request.gate.is_empty() { ABSENT } else { PRESENT },
            "gate_words" => gate_words,
        ];

        self.bundles
            .format_message(language, message_id, args.as_ref())
    }

    /// Render the request's template in each enabled language.
    ///
    /// Languages not listed stay empty in the output.
    pub fn render_all(&self, request: &AnnouncementRequest, languages: &[Language]) -> RenderedOutput {
        let mut output = RenderedOutput::default();
        for &language in languages {
            output.set(language, self.render(language, request.template, request));
        }
        output
    }

    /// Whether the catalog has a script for the pair; free text always does.
    pub fn supports(&self, language: Language, template: TemplateKind) -> bool {
        template
            .message_id()
            .map_or(true, |id| self.bundles.has_message(language, id))
    }

    fn destination(&self, language: Language, request: &AnnouncementRequest) -> String {
        if !request.destination.is_empty() {
            return request.destination.clone();
        }

        self.bundles
            .format_message(language, DESTINATION_FALLBACK_ID, None)
            .unwrap_or_else(|err: I18nError| {
                warn!("Using built-in destination phrase for {}: {}", language, err);
                DESTINATION_FALLBACK.to_string()
            })
    }
}

static DEFAULT_RENDERER: Lazy<Option<AnnouncementRenderer>> = Lazy::new(|| {
    AnnouncementRenderer::new()
        .map_err(|err| warn!("Built-in announcement catalog unavailable: {}", err))
        .ok()
});

/// Render with the built-in scripts.
///
/// ```rust
/// use gatecall_common::{AnnouncementRequest, Language, TemplateKind};
///
/// let request = AnnouncementRequest::new(TemplateKind::FreeText).with_free_text("hello");
/// assert_eq!(gatecall_i18n::render(Language::Portuguese, TemplateKind::FreeText, &request), "hello");
/// ```
pub fn render(language: Language, template: TemplateKind, request: &AnnouncementRequest) -> String {
    DEFAULT_RENDERER
        .as_ref()
        .map(|renderer| renderer.render(language, template, request))
        .unwrap_or_default()
}

/// [`AnnouncementRenderer::render_all`] with the built-in scripts
pub fn render_all(request: &AnnouncementRequest, languages: &[Language]) -> RenderedOutput {
    DEFAULT_RENDERER
        .as_ref()
        .map(|renderer| renderer.render_all(request, languages))
        .unwrap_or_default()
}
