//! Voice descriptions and selection.

use gatecall_common::{GatecallError, Language};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names that mark a voice as female, matched at the start of a word.
static FEMALE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(female|woman|mujer|femin)").expect("Invalid female voice regex pattern")
});

/// Names that mark a voice as male. The word boundary keeps "female" out.
static MALE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(male|man|hombre|masc)").expect("Invalid male voice regex pattern")
});

/// A voice offered by the speech engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    /// Engine specific identifier
    pub id: String,
    /// Human-readable voice name
    pub name: String,
    /// BCP 47 style language tag (e.g. "es-AR", "en_US")
    pub language: String,
}

impl VoiceInfo {
    /// Create a voice description
    pub fn new(id: impl Into<String>, name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            language: language.into(),
        }
    }

    /// Language tag lowercased with `-` as separator
    fn normalized_language(&self) -> String {
        self.language.to_lowercase().replace('_', "-")
    }

    /// Whether the name suggests a female voice
    pub fn sounds_female(&self) -> bool {
        FEMALE_NAME.is_match(&self.name)
    }

    /// Whether the name suggests a male voice
    pub fn sounds_male(&self) -> bool {
        MALE_NAME.is_match(&self.name)
    }
}

/// Preferred voice gender for playback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPreference {
    /// First voice for the language
    #[default]
    Any,
    /// Prefer a voice whose name marks it as male
    Male,
    /// Prefer a voice whose name marks it as female
    Female,
}

impl GenderPreference {
    /// Lowercase identifier
    pub const fn id(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for GenderPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GenderPreference {
    type Err = GatecallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(GatecallError::validation_field(
                format!("unknown voice gender '{other}'"),
                "gender",
            )),
        }
    }
}

/// Picks the voice an announcement is read with
pub trait VoiceSelector {
    /// Choose a voice for `language`, or `None` to let the engine use its default
    fn select<'a>(
        &self,
        voices: &'a [VoiceInfo],
        language: Language,
        gender: GenderPreference,
    ) -> Option<&'a VoiceInfo>;
}

/// Selects by language tag, then by gender keywords in the voice name.
///
/// Voices tagged `<lang>-*` are preferred over any other tag merely starting
/// with `<lang>`. When no voice of the requested gender exists the first
/// voice for the language is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordVoiceSelector;

impl KeywordVoiceSelector {
    fn for_language(voices: &[VoiceInfo], language: Language) -> Vec<&VoiceInfo> {
        let code = language.short_code();
        let prefix = format!("{code}-");

        let regional: Vec<&VoiceInfo> = voices
            .iter()
            .filter(|voice| voice.normalized_language().starts_with(&prefix))
            .collect();
        if !regional.is_empty() {
            return regional;
        }

        voices
            .iter()
            .filter(|voice| voice.normalized_language().starts_with(code))
            .collect()
    }
}

impl VoiceSelector for KeywordVoiceSelector {
    fn select<'a>(
        &self,
        voices: &'a [VoiceInfo],
        language: Language,
        gender: GenderPreference,
    ) -> Option<&'a VoiceInfo> {
        let candidates = Self::for_language(voices, language);

        let preferred = match gender {
            GenderPreference::Any => None,
            GenderPreference::Female => candidates.iter().find(|voice| voice.sounds_female()),
            GenderPreference::Male => candidates.iter().find(|voice| voice.sounds_male()),
        };

        preferred.or_else(|| candidates.first()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voices() -> Vec<VoiceInfo> {
        vec![
            VoiceInfo::new("1", "Google US English", "en-US"),
            VoiceInfo::new("2", "Microsoft Zira - English Female", "en-US"),
            VoiceInfo::new("3", "Microsoft David - English Male", "en-US"),
            VoiceInfo::new("4", "Paulina", "es_MX"),
            VoiceInfo::new("5", "Jorge Hombre", "es-ES"),
            VoiceInfo::new("6", "Generic Portuguese", "pt"),
        ]
    }

    #[test]
    fn test_any_takes_first_voice_for_language() {
        let voices = voices();
        let voice = KeywordVoiceSelector.select(&voices, Language::English, GenderPreference::Any);
        assert_eq!(voice.map(|v| v.id.as_str()), Some("1"));
    }

    #[test]
    fn test_female_keyword() {
        let voices = voices();
        let voice =
            KeywordVoiceSelector.select(&voices, Language::English, GenderPreference::Female);
        assert_eq!(voice.map(|v| v.id.as_str()), Some("2"));
    }

    #[test]
    fn test_male_does_not_match_female() {
        let voices = voices();
        let voice = KeywordVoiceSelector.select(&voices, Language::English, GenderPreference::Male);
        assert_eq!(voice.map(|v| v.id.as_str()), Some("3"));
    }

    #[test]
    fn test_gender_falls_back_to_first_match() {
        let voices = voices();
        let voice =
            KeywordVoiceSelector.select(&voices, Language::Spanish, GenderPreference::Female);
        assert_eq!(voice.map(|v| v.id.as_str()), Some("4"));

        let voice = KeywordVoiceSelector.select(&voices, Language::Spanish, GenderPreference::Male);
        assert_eq!(voice.map(|v| v.id.as_str()), Some("5"));
    }

    #[test]
    fn test_bare_language_tag_is_a_fallback() {
        let voices = voices();
        let voice =
            KeywordVoiceSelector.select(&voices, Language::Portuguese, GenderPreference::Any);
        assert_eq!(voice.map(|v| v.id.as_str()), Some("6"));
    }

    #[test]
    fn test_no_voice_for_language() {
        let voices = vec![VoiceInfo::new("1", "Amelie", "fr-FR")];
        assert!(KeywordVoiceSelector
            .select(&voices, Language::English, GenderPreference::Any)
            .is_none());
        assert!(KeywordVoiceSelector
            .select(&[], Language::English, GenderPreference::Female)
            .is_none());
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("Female".parse::<GenderPreference>().unwrap(), GenderPreference::Female);
        assert_eq!(" any ".parse::<GenderPreference>().unwrap(), GenderPreference::Any);
        assert!("robot".parse::<GenderPreference>().is_err());
        assert_eq!(GenderPreference::Male.to_string(), "male");
    }
}
