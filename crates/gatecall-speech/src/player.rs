//! Playback orchestration

use crate::error::{SpeechError, SpeechResult};
use crate::settings::SpeechSettings;
use crate::voice::{GenderPreference, KeywordVoiceSelector, VoiceInfo, VoiceSelector};
use gatecall_common::{Language, RenderedOutput};
use tracing::{debug, info, warn};

/// One announcement handed to a speech engine
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Text to read
    pub text: String,
    /// Language the text is written in
    pub language: Language,
    /// Voice to read it with; `None` leaves the engine default
    pub voice: Option<VoiceInfo>,
    /// Rate, pitch and volume
    pub settings: SpeechSettings,
}

/// A speech engine
pub trait SpeechPlayer {
    /// Voices the engine offers
    fn voices(&mut self) -> SpeechResult<Vec<VoiceInfo>>;

    /// Cancel anything currently being spoken
    fn stop(&mut self) -> SpeechResult<()>;

    /// Start reading an utterance
    fn speak(&mut self, utterance: &Utterance) -> SpeechResult<()>;
}

/// Reads rendered announcements through a [`SpeechPlayer`]
#[derive(Debug)]
pub struct Announcer<P, S = KeywordVoiceSelector> {
    player: P,
    selector: S,
    settings: SpeechSettings,
    gender: GenderPreference,
}

impl<P: SpeechPlayer> Announcer<P> {
    /// Announcer using keyword voice selection and default settings
    pub fn new(player: P) -> Self {
        Self::with_selector(player, KeywordVoiceSelector)
    }
}

impl<P: SpeechPlayer, S: VoiceSelector> Announcer<P, S> {
    /// Announcer with a custom voice selector
    pub fn with_selector(player: P, selector: S) -> Self {
        Self {
            player,
            selector,
            settings: SpeechSettings::default(),
            gender: GenderPreference::default(),
        }
    }

    /// Use these playback settings
    #[must_use]
    pub fn with_settings(mut self, settings: SpeechSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Prefer voices of this gender
    #[must_use]
    pub fn with_gender(mut self, gender: GenderPreference) -> Self {
        self.gender = gender;
        self
    }

    /// Read `text` in `language`.
    ///
    /// Any announcement still playing is cancelled first. A voice list the
    /// engine cannot provide is not fatal; the engine default voice is used.
    pub fn announce(&mut self, language: Language, text: &str) -> SpeechResult<Utterance> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText {
                language: language.short_code().to_string(),
            });
        }

        self.settings.check()?;

        let voices = self.player.voices().unwrap_or_else(|err| {
            warn!("Could not list voices, using engine default: {}", err);
            Vec::new()
        });
        let voice = self.selector.select(&voices, language, self.gender).cloned();

        match &voice {
            Some(voice) => debug!("Selected voice '{}' ({}) for {}", voice.name, voice.language, language),
            None => debug!("No {} voice among {} available, using engine default", language, voices.len()),
        }

        let utterance = Utterance {
            text: text.to_string(),
            language,
            voice,
            settings: self.settings,
        };

        self.player.stop()?;
        self.player.speak(&utterance)?;

        info!("Speaking {} announcement ({} chars)", language, utterance.text.chars().count());
        Ok(utterance)
    }

    /// Read the slot for `language` from a rendered output
    pub fn announce_output(
        &mut self,
        output: &RenderedOutput,
        language: Language,
    ) -> SpeechResult<Utterance> {
        self.announce(language, output.get(language))
    }

    /// The underlying player
    pub fn player(&self) -> &P {
        &self.player
    }
}
