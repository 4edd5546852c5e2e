//! Tests for the shared domain types: trait coverage, serde shapes, and parsing.

use gatecall_common::types::*;
use std::collections::HashSet;

#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn test_language_serializes_as_short_code() {
        let json = serde_json::to_string(&Language::Portuguese).unwrap();
        assert_eq!(json, "\"pt\"");

        let parsed: Language = serde_json::from_str("\"es-AR\"").unwrap();
        assert_eq!(parsed, Language::Spanish);
    }

    #[test]
    fn test_template_accepts_legacy_ids() {
        let parsed: TemplateKind = serde_json::from_str("\"ultimo-aviso\"").unwrap();
        assert_eq!(parsed, TemplateKind::FinalCall);

        let json = serde_json::to_string(&TemplateKind::WeatherHold).unwrap();
        assert_eq!(json, "\"weather-hold\"");
    }

    #[test]
    fn test_boarding_group_serializes_as_number() {
        let json = serde_json::to_string(&BoardingGroup::Three).unwrap();
        assert_eq!(json, "3");

        let err = serde_json::from_str::<BoardingGroup>("7");
        assert!(err.is_err());
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let request: AnnouncementRequest =
            serde_json::from_str(r#"{"flight_number":"100","groups":[2,1,2]}"#).unwrap();

        assert_eq!(request.flight_number, "100");
        assert_eq!(request.template, TemplateKind::PreBoarding);
        assert!(request.destination.is_empty());
        assert_eq!(
            request.groups.into_iter().collect::<Vec<_>>(),
            vec![BoardingGroup::One, BoardingGroup::Two]
        );
    }

    #[test]
    fn test_rendered_output_always_has_three_slots() {
        let output = RenderedOutput {
            en: "Your attention please.".to_string(),
            ..RenderedOutput::default()
        };
        let value: serde_json::Value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["es"], "");
        assert_eq!(value["en"], "Your attention please.");
        assert_eq!(value["pt"], "");
    }
}

#[cfg(test)]
mod identity_tests {
    use super::*;

    #[test]
    fn test_template_ids_are_unique() {
        let ids: HashSet<_> = TemplateKind::ALL.iter().map(|t| t.id()).collect();
        let legacy: HashSet<_> = TemplateKind::ALL.iter().map(|t| t.legacy_id()).collect();
        assert_eq!(ids.len(), TemplateKind::ALL.len());
        assert_eq!(legacy.len(), TemplateKind::ALL.len());
        assert!(ids.is_disjoint(&legacy));
    }

    #[test]
    fn test_template_round_trips_through_display() {
        for kind in TemplateKind::ALL {
            assert_eq!(kind.to_string().parse::<TemplateKind>().unwrap(), kind);
            assert_eq!(kind.legacy_id().parse::<TemplateKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_language_display_is_short_code() {
        let codes: Vec<String> = Language::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(codes, vec!["es", "en", "pt"]);
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: unsupported language 'fr'");
    }

    #[test]
    fn test_group_index_matches_id() {
        for (index, group) in BoardingGroup::ALL.iter().enumerate() {
            assert_eq!(group.index(), index);
            assert_eq!(BoardingGroup::from_id(group.id()), Some(*group));
        }
    }
}

mod property_tests {
    use gatecall_common::{BoardingGroup, Language};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_group_ids_outside_range_are_rejected(id in any::<u8>()) {
            let parsed = BoardingGroup::try_from(id);
            prop_assert_eq!(parsed.is_ok(), (1..=4).contains(&id));
            if let Ok(group) = parsed {
                prop_assert_eq!(group.id(), id);
            }
        }

        #[test]
        fn test_language_code_ignores_case_and_region(
            index in 0usize..3,
            region in "[A-Za-z]{2}",
            upper in any::<bool>(),
        ) {
            let language = Language::ALL[index];
            let code = format!("{}-{}", language.short_code(), region);
            let code = if upper { code.to_uppercase() } else { code };
            prop_assert_eq!(Language::from_code(&code), Some(language));
        }
    }
}
