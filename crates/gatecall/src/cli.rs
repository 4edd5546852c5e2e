//! Command-line arguments

use clap::{Parser, ValueEnum};
use gatecall_common::{AnnouncementRequest, BoardingGroup, Language, TemplateKind};
use std::path::PathBuf;

/// How rendered announcements are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One labelled block per language
    #[default]
    Text,
    /// `{"es": ..., "en": ..., "pt": ...}`
    Json,
}

/// Generate multilingual airport boarding announcements
#[derive(Debug, Clone, Parser)]
#[command(name = "gatecall", version, about)]
pub struct Cli {
    /// Flight number, e.g. 5240 or "FO 5240"
    #[arg(short, long, default_value = "")]
    pub flight: String,

    /// Destination city
    #[arg(short, long, default_value = "")]
    pub destination: String,

    /// Boarding gate
    #[arg(short, long, default_value = "")]
    pub gate: String,

    /// New gate when boarding moved
    #[arg(long = "new-gate", default_value = "")]
    pub secondary_gate: String,

    /// Announcement template (e.g. pre-boarding, final-call, demora)
    #[arg(short, long)]
    pub template: Option<TemplateKind>,

    /// Boarding group to call (1-4); repeat for several groups
    #[arg(long = "group")]
    pub groups: Vec<BoardingGroup>,

    /// Free text announcement; implies the free-text template
    #[arg(long)]
    pub text: Option<String>,

    /// Language to render (es, en, pt); repeat for several
    #[arg(short, long = "lang")]
    pub languages: Vec<Language>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Read the announcement aloud in this language
    #[arg(long)]
    pub speak: Option<Language>,

    /// Configuration file (YAML or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level filter, overrides the configuration file
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory with <lang>/main.ftl script overrides
    #[arg(long)]
    pub locales_dir: Option<PathBuf>,
}

impl Cli {
    /// Template to render: explicit, else free text when `--text` was given,
    /// else `default`
    pub fn template_or(&self, default: TemplateKind) -> TemplateKind {
        match (self.template, &self.text) {
            (Some(template), _) => template,
            (None, Some(_)) => TemplateKind::FreeText,
            (None, None) => default,
        }
    }

    /// Build the announcement request from the arguments
    pub fn request(&self, default_template: TemplateKind) -> AnnouncementRequest {
        let request = AnnouncementRequest::new(self.template_or(default_template))
            .with_flight_number(self.flight.trim())
            .with_destination(self.destination.trim())
            .with_gate(self.gate.trim())
            .with_secondary_gate(self.secondary_gate.trim())
            .with_groups(self.groups.iter().copied());

        match &self.text {
            Some(text) => request.with_free_text(text.trim()),
            None => request,
        }
    }

    /// Languages from the command line in first-seen order, else `configured`
    pub fn languages_or(&self, configured: &[Language]) -> Vec<Language> {
        if self.languages.is_empty() {
            return configured.to_vec();
        }

        let mut languages = Vec::with_capacity(self.languages.len());
        for language in &self.languages {
            if !languages.contains(language) {
                languages.push(*language);
            }
        }
        languages
    }
}
