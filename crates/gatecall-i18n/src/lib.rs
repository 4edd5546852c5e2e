//! # Gatecall I18n
//!
//! Multilingual boarding announcement rendering for Gatecall.
//!
//! The crate is split into small pieces that build on each other:
//!
//! - [`numerals`] spells flight numbers digit by digit and gate numbers as words
//! - [`gates`] builds the gate clause, including the gate-change variant
//! - [`groups`] turns selected boarding groups into row-range phrases
//! - [`renderer`] fills the Fluent announcement scripts with all of the above
//!
//! # Example
//!
//! ```rust
//! use gatecall_common::{AnnouncementRequest, Language, TemplateKind};
//! use gatecall_i18n::AnnouncementRenderer;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = AnnouncementRenderer::new()?;
//! let request = AnnouncementRequest::new(TemplateKind::Delay)
//!     .with_flight_number("5240")
//!     .with_destination("Lima");
//!
//! let text = renderer.render(Language::English, TemplateKind::Delay, &request);
//! assert!(text.contains("flight five two four zero to Lima is delayed"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bundle;
pub mod error;
pub mod gates;
pub mod groups;
pub mod locale;
pub mod numerals;
pub mod renderer;
pub mod resource;

pub use bundle::BundleManager;
pub use error::{I18nError, I18nResult};
pub use gates::{build_gate_clause, gate_sentence};
pub use groups::{build_group_phrase, GroupPhrase};
pub use numerals::{spell_digits, spell_digits_for_code, spell_ordinal_gate, spell_ordinal_gate_for_code};
pub use renderer::{render, render_all, AnnouncementRenderer};

// Re-export commonly used Fluent types
pub use fluent_bundle::{FluentArgs, FluentValue};
