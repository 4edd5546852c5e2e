//! # Gatecall Speech
//!
//! Reads rendered announcements aloud.
//!
//! Playback goes through the [`SpeechPlayer`] trait so the orchestration in
//! [`Announcer`] works the same against the operating system's speech engine
//! (the `native` feature, backed by the `tts` crate) and against test doubles.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
#[cfg(feature = "native")]
pub mod native;
pub mod player;
pub mod settings;
pub mod voice;

pub use error::{SpeechError, SpeechResult};
#[cfg(feature = "native")]
pub use native::TtsPlayer;
pub use player::{Announcer, SpeechPlayer, Utterance};
pub use settings::SpeechSettings;
pub use voice::{GenderPreference, KeywordVoiceSelector, VoiceInfo, VoiceSelector};
