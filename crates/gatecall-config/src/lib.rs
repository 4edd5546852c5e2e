//! # Gatecall Config
//!
//! Operator configuration for the Gatecall CLI: which languages to render,
//! the default template, where locale overrides live, speech playback and
//! logging. Files are YAML or TOML; `GATECALL_*` environment variables take
//! precedence over file values.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigFormat, ConfigLoader};
pub use settings::{AnnouncementConfig, Config, SpeechConfig};
