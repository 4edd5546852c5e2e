//! Application flow: configuration, rendering, printing, speech

use crate::cli::{Cli, OutputFormat};
use crate::output::{format_json, format_text};
use anyhow::{anyhow, Context};
use gatecall_common::{init_logging, Language, RenderedOutput};
use gatecall_config::{Config, ConfigLoader};
use gatecall_i18n::AnnouncementRenderer;
use std::io::Write;
use tracing::{debug, info};

/// Result of rendering one command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Rendered text per language slot
    pub output: RenderedOutput,
    /// Languages that were rendered, in print order
    pub languages: Vec<Language>,
}

impl Generated {
    /// Printable form in the requested format
    pub fn format(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Text => Ok(format_text(&self.output, &self.languages)),
            OutputFormat::Json => format_json(&self.output).context("failed to encode output as JSON"),
        }
    }
}

/// Render the announcement described by `cli` under `config`
pub fn generate(cli: &Cli, config: &Config) -> anyhow::Result<Generated> {
    let locales_dir = cli
        .locales_dir
        .as_ref()
        .or(config.announcement.locales_dir.as_ref());

    let renderer = match locales_dir {
        Some(dir) => AnnouncementRenderer::with_overrides(dir)
            .with_context(|| format!("failed to load locale overrides from {}", dir.display()))?,
        None => AnnouncementRenderer::new().context("failed to load built-in announcement scripts")?,
    };

    let request = cli.request(config.announcement.default_template);
    let languages = cli.languages_or(&config.announcement.languages);
    debug!("Rendering {} for {:?}", request.template, languages);

    let output = renderer.render_all(&request, &languages);
    Ok(Generated { output, languages })
}

/// Run the command line end to end
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }

    init_logging(&config.logging).map_err(|err| anyhow!("failed to initialise logging: {err}"))?;
    info!("Gatecall {} starting", env!("CARGO_PKG_VERSION"));

    let generated = generate(&cli, &config)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", generated.format(cli.format)?).context("failed to write output")?;
    stdout.flush().context("failed to write output")?;

    let speak = cli
        .speak
        .or_else(|| config.speech.enabled.then_some(config.speech.language));
    if let Some(language) = speak {
        speak_output(&config, &generated.output, language)?;
    }

    Ok(())
}

#[cfg(feature = "native")]
fn speak_output(config: &Config, output: &RenderedOutput, language: Language) -> anyhow::Result<()> {
    use gatecall_speech::{Announcer, TtsPlayer};

    let player = TtsPlayer::new().context("failed to open the speech engine")?;
    let mut announcer = Announcer::new(player)
        .with_settings(config.speech.settings)
        .with_gender(config.speech.gender);

    announcer
        .announce_output(output, language)
        .with_context(|| format!("failed to speak the {language} announcement"))?;
    announcer
        .player()
        .wait_until_done()
        .context("speech engine failed while speaking")?;
    Ok(())
}

#[cfg(not(feature = "native"))]
fn speak_output(_config: &Config, _output: &RenderedOutput, language: Language) -> anyhow::Result<()> {
    Err(anyhow!(
        "cannot speak the {language} announcement: gatecall was built without the `native` feature"
    ))
}
