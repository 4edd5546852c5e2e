//! Operating system speech engine through the `tts` crate

use crate::error::{SpeechError, SpeechResult};
use crate::player::{SpeechPlayer, Utterance};
use crate::settings::{scale_to_engine, volume_to_engine};
use crate::voice::VoiceInfo;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};
use tts::Tts;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// [`SpeechPlayer`] backed by the platform speech engine
pub struct TtsPlayer {
    tts: Tts,
}

impl std::fmt::Debug for TtsPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtsPlayer").finish_non_exhaustive()
    }
}

impl TtsPlayer {
    /// Open the default engine for this platform
    pub fn new() -> SpeechResult<Self> {
        let tts = Tts::default().map_err(|err| SpeechError::BackendUnavailable(err.to_string()))?;
        Ok(Self { tts })
    }

    /// Block until the engine has finished speaking
    pub fn wait_until_done(&self) -> SpeechResult<()> {
        if !self.tts.supported_features().is_speaking {
            return Ok(());
        }

        thread::sleep(POLL_INTERVAL);
        while self.tts.is_speaking().map_err(SpeechError::backend)? {
            thread::sleep(POLL_INTERVAL);
        }
        Ok(())
    }

    fn apply_settings(&mut self, utterance: &Utterance) -> SpeechResult<()> {
        let features = self.tts.supported_features();
        let settings = utterance.settings;

        if features.rate {
            let rate = scale_to_engine(
                settings.rate,
                self.tts.min_rate(),
                self.tts.normal_rate(),
                self.tts.max_rate(),
            );
            self.tts.set_rate(rate).map_err(SpeechError::backend)?;
        }

        if features.pitch {
            let pitch = scale_to_engine(
                settings.pitch,
                self.tts.min_pitch(),
                self.tts.normal_pitch(),
                self.tts.max_pitch(),
            );
            self.tts.set_pitch(pitch).map_err(SpeechError::backend)?;
        }

        if features.volume {
            let volume =
                volume_to_engine(settings.volume, self.tts.min_volume(), self.tts.max_volume());
            self.tts.set_volume(volume).map_err(SpeechError::backend)?;
        }

        Ok(())
    }

    fn apply_voice(&mut self, wanted: &VoiceInfo) -> SpeechResult<()> {
        if !self.tts.supported_features().voice {
            debug!("Engine cannot switch voices, ignoring '{}'", wanted.name);
            return Ok(());
        }

        let voices = self.tts.voices().map_err(SpeechError::backend)?;
        match voices.iter().find(|voice| voice.id() == wanted.id) {
            Some(voice) => self.tts.set_voice(voice).map_err(SpeechError::backend),
            None => {
                warn!("Voice '{}' disappeared from the engine", wanted.id);
                Ok(())
            }
        }
    }
}

impl SpeechPlayer for TtsPlayer {
    fn voices(&mut self) -> SpeechResult<Vec<VoiceInfo>> {
        if !self.tts.supported_features().voice {
            return Ok(Vec::new());
        }

        let voices = self.tts.voices().map_err(SpeechError::backend)?;
        Ok(voices
            .into_iter()
            .map(|voice| VoiceInfo::new(voice.id(), voice.name(), voice.language().to_string()))
            .collect())
    }

    fn stop(&mut self) -> SpeechResult<()> {
        if self.tts.supported_features().stop {
            self.tts.stop().map_err(SpeechError::backend)?;
        }
        Ok(())
    }

    fn speak(&mut self, utterance: &Utterance) -> SpeechResult<()> {
        self.apply_settings(utterance)?;
        if let Some(voice) = &utterance.voice {
            self.apply_voice(voice)?;
        }

        self.tts
            .speak(utterance.text.as_str(), true)
            .map_err(SpeechError::backend)?;
        Ok(())
    }
}
