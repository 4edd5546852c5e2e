//! Domain types shared by the renderer, speech player, and configuration.

use crate::error::GatecallError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Token spoken in place of the flight number when the operator left it blank.
pub const FLIGHT_NUMBER_PLACEHOLDER: &str = "XXXX";

/// Announcement languages.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Language {
    /// Spanish
    #[default]
    #[serde(rename = "es", alias = "es-AR", alias = "spanish")]
    Spanish,
    /// English
    #[serde(rename = "en", alias = "en-US", alias = "english")]
    English,
    /// Portuguese
    #[serde(rename = "pt", alias = "pt-BR", alias = "portuguese")]
    Portuguese,
}

impl Language {
    /// Every supported language, in output slot order.
    pub const ALL: [Self; 3] = [Self::Spanish, Self::English, Self::Portuguese];

    /// Full language tag used for message catalogs
    pub const fn code(self) -> &'static str {
        match self {
            Self::Spanish => "es-AR",
            Self::English => "en-US",
            Self::Portuguese => "pt-BR",
        }
    }

    /// Two letter language code
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::Spanish => "es",
            Self::English => "en",
            Self::Portuguese => "pt",
        }
    }

    /// Parse a language from a short code or a full tag such as `pt-BR`.
    ///
    /// Matching is case-insensitive and only looks at the primary subtag.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        match primary.as_str() {
            "es" => Some(Self::Spanish),
            "en" => Some(Self::English),
            "pt" => Some(Self::Portuguese),
            _ => None,
        }
    }

    /// Display name in the language itself
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Spanish => "Español",
            Self::English => "English",
            Self::Portuguese => "Português",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_code())
    }
}

impl FromStr for Language {
    type Err = GatecallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| {
            GatecallError::validation_field(format!("unsupported language '{s}'"), "language")
        })
    }
}

/// Kind of announcement to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// Boarding will begin shortly
    #[default]
    #[serde(alias = "pre-embarque")]
    PreBoarding,
    /// Boarding starts with priority passengers and optional groups
    #[serde(alias = "inicio-embarque")]
    BoardingStart,
    /// Continue boarding with the selected groups
    #[serde(alias = "llamada-grupos")]
    GroupCall,
    /// Last call before baggage offload
    #[serde(alias = "ultimo-aviso")]
    FinalCall,
    /// Operational delay
    #[serde(alias = "demora")]
    Delay,
    /// Flight cancelled
    #[serde(alias = "cancelacion")]
    Cancellation,
    /// Flight held for weather at destination
    #[serde(alias = "condicional")]
    WeatherHold,
    /// Operator supplied text, spoken verbatim
    #[serde(alias = "texto-libre")]
    FreeText,
}

impl TemplateKind {
    /// Every template kind.
    pub const ALL: [Self; 8] = [
        Self::PreBoarding,
        Self::BoardingStart,
        Self::GroupCall,
        Self::FinalCall,
        Self::Delay,
        Self::Cancellation,
        Self::WeatherHold,
        Self::FreeText,
    ];

    /// Canonical identifier
    pub const fn id(self) -> &'static str {
        match self {
            Self::PreBoarding => "pre-boarding",
            Self::BoardingStart => "boarding-start",
            Self::GroupCall => "group-call",
            Self::FinalCall => "final-call",
            Self::Delay => "delay",
            Self::Cancellation => "cancellation",
            Self::WeatherHold => "weather-hold",
            Self::FreeText => "free-text",
        }
    }

    /// Identifier used by the original operator console
    pub const fn legacy_id(self) -> &'static str {
        match self {
            Self::PreBoarding => "pre-embarque",
            Self::BoardingStart => "inicio-embarque",
            Self::GroupCall => "llamada-grupos",
            Self::FinalCall => "ultimo-aviso",
            Self::Delay => "demora",
            Self::Cancellation => "cancelacion",
            Self::WeatherHold => "condicional",
            Self::FreeText => "texto-libre",
        }
    }

    /// Message id in the announcement catalog; `None` for free text.
    pub const fn message_id(self) -> Option<&'static str> {
        match self {
            Self::FreeText => None,
            other => Some(other.id()),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TemplateKind {
    type Err = GatecallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == needle || kind.legacy_id() == needle)
            .ok_or_else(|| {
                GatecallError::validation_field(format!("unknown template '{s}'"), "template")
            })
    }
}

/// Boarding group, ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BoardingGroup {
    /// Rows 1 to 8
    One,
    /// Rows 9 to 16
    Two,
    /// Rows 17 to 24
    Three,
    /// Rows 25 to 32
    Four,
}

impl BoardingGroup {
    /// Every boarding group in ascending order.
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Numeric id (1 to 4)
    pub const fn id(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Look a group up by numeric id
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// Zero based position in per-group tables
    pub const fn index(self) -> usize {
        self.id() as usize - 1
    }
}

impl fmt::Display for BoardingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl TryFrom<u8> for BoardingGroup {
    type Error = GatecallError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_id(value).ok_or_else(|| {
            GatecallError::validation_field(
                format!("boarding group must be between 1 and 4, got {value}"),
                "groups",
            )
        })
    }
}

impl From<BoardingGroup> for u8 {
    fn from(group: BoardingGroup) -> Self {
        group.id()
    }
}

impl FromStr for BoardingGroup {
    type Err = GatecallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u8 = s.trim().parse().map_err(|_| {
            GatecallError::validation_field(format!("invalid boarding group '{s}'"), "groups")
        })?;
        Self::try_from(id)
    }
}

/// Operator input for one announcement.
///
/// String fields are expected to be trimmed by the collector. Empty strings
/// mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnouncementRequest {
    /// Flight number, digits or an alphanumeric code
    pub flight_number: String,
    /// Destination city
    pub destination: String,
    /// Announced gate
    pub gate: String,
    /// Replacement gate after a gate change
    pub secondary_gate: String,
    /// Which announcement to render
    pub template: TemplateKind,
    /// Boarding groups being called
    pub groups: BTreeSet<BoardingGroup>,
    /// Verbatim text for [`TemplateKind::FreeText`]
    pub free_text: String,
}

impl AnnouncementRequest {
    /// Create an empty request for the given template
    pub fn new(template: TemplateKind) -> Self {
        Self {
            template,
            ..Self::default()
        }
    }

    /// Set the flight number
    #[must_use]
    pub fn with_flight_number(mut self, flight_number: impl Into<String>) -> Self {
        self.flight_number = flight_number.into();
        self
    }

    /// Set the destination
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Set the gate
    #[must_use]
    pub fn with_gate(mut self, gate: impl Into<String>) -> Self {
        self.gate = gate.into();
        self
    }

    /// Set the replacement gate
    #[must_use]
    pub fn with_secondary_gate(mut self, gate: impl Into<String>) -> Self {
        self.secondary_gate = gate.into();
        self
    }

    /// Select boarding groups; duplicates collapse and order is irrelevant
    #[must_use]
    pub fn with_groups(mut self, groups: impl IntoIterator<Item = BoardingGroup>) -> Self {
        self.groups.extend(groups);
        self
    }

    /// Set the free text
    #[must_use]
    pub fn with_free_text(mut self, text: impl Into<String>) -> Self {
        self.free_text = text.into();
        self
    }

    /// Flight number as typed, or the placeholder when blank
    pub fn flight_number_or_placeholder(&self) -> &str {
        if self.flight_number.is_empty() {
            FLIGHT_NUMBER_PLACEHOLDER
        } else {
            &self.flight_number
        }
    }
}

/// One rendered string per language; unrequested languages stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedOutput {
    /// Spanish text
    pub es: String,
    /// English text
    pub en: String,
    /// Portuguese text
    pub pt: String,
}

impl RenderedOutput {
    /// Text for a language
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Spanish => &self.es,
            Language::English => &self.en,
            Language::Portuguese => &self.pt,
        }
    }

    /// Replace the text for a language
    pub fn set(&mut self, language: Language, text: String) {
        match language {
            Language::Spanish => self.es = text,
            Language::English => self.en = text,
            Language::Portuguese => self.pt = text,
        }
    }

    /// All three slots in output order, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }

    /// Whether every slot is empty
    pub fn is_empty(&self) -> bool {
        self.es.is_empty() && self.en.is_empty() && self.pt.is_empty()
    }
}
