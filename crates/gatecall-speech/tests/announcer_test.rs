//! Announcer behaviour against a mocked speech engine

use gatecall_common::test_utils::{init_test_logging, sample_request};
use gatecall_common::{Language, RenderedOutput, TemplateKind};
use gatecall_speech::{
    Announcer, GenderPreference, SpeechError, SpeechPlayer, SpeechResult, SpeechSettings,
    Utterance, VoiceInfo,
};
use mockall::{mock, Sequence};

mock! {
    pub Player {}

    impl SpeechPlayer for Player {
        fn voices(&mut self) -> SpeechResult<Vec<VoiceInfo>>;
        fn stop(&mut self) -> SpeechResult<()>;
        fn speak(&mut self, utterance: &Utterance) -> SpeechResult<()>;
    }
}

fn engine_voices() -> Vec<VoiceInfo> {
    vec![
        VoiceInfo::new("es-1", "Helena", "es-ES"),
        VoiceInfo::new("es-2", "Sabina Mujer", "es-MX"),
        VoiceInfo::new("en-1", "Daniel", "en-GB"),
    ]
}

#[test]
fn test_stops_before_speaking_with_selected_voice() {
    init_test_logging();
    let mut player = MockPlayer::new();
    let mut seq = Sequence::new();

    player.expect_voices().times(1).returning(|| Ok(engine_voices()));
    player
        .expect_stop()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(()));
    player
        .expect_speak()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|utterance| {
            utterance.text == "Su atención por favor"
                && utterance.language == Language::Spanish
                && utterance.voice.as_ref().map(|v| v.id.as_str()) == Some("es-2")
        })
        .returning(|_| Ok(()));

    let mut announcer = Announcer::new(player).with_gender(GenderPreference::Female);
    let utterance = announcer
        .announce(Language::Spanish, "Su atención por favor")
        .unwrap();
    assert_eq!(utterance.settings, SpeechSettings::default());
}

#[test]
fn test_empty_text_never_reaches_the_engine() {
    let mut player = MockPlayer::new();
    player.expect_voices().never();
    player.expect_stop().never();
    player.expect_speak().never();

    let mut announcer = Announcer::new(player);
    let err = announcer.announce(Language::English, "  ").unwrap_err();
    assert!(matches!(err, SpeechError::EmptyText { ref language } if language == "en"));
}

#[test]
fn test_invalid_settings_never_reach_the_engine() {
    let mut player = MockPlayer::new();
    player.expect_voices().never();
    player.expect_stop().never();
    player.expect_speak().never();

    let settings = SpeechSettings {
        volume: 1.5,
        ..SpeechSettings::default()
    };
    let mut announcer = Announcer::new(player).with_settings(settings);
    assert!(matches!(
        announcer.announce(Language::English, "Hello"),
        Err(SpeechError::InvalidSettings(_))
    ));
}

#[test]
fn test_voice_listing_failure_uses_engine_default() {
    let mut player = MockPlayer::new();
    player
        .expect_voices()
        .returning(|| Err(SpeechError::backend("no voices")));
    player.expect_stop().returning(|| Ok(()));
    player
        .expect_speak()
        .withf(|utterance| utterance.voice.is_none())
        .returning(|_| Ok(()));

    let mut announcer = Announcer::new(player);
    let utterance = announcer.announce(Language::Portuguese, "Olá").unwrap();
    assert!(utterance.voice.is_none());
}

#[test]
fn test_no_voice_for_language_uses_engine_default() {
    let mut player = MockPlayer::new();
    player.expect_voices().returning(|| Ok(engine_voices()));
    player.expect_stop().returning(|| Ok(()));
    player
        .expect_speak()
        .withf(|utterance| utterance.voice.is_none() && utterance.settings.rate == 1.5)
        .returning(|_| Ok(()));

    let settings = SpeechSettings {
        rate: 1.5,
        ..SpeechSettings::default()
    };
    let mut announcer = Announcer::new(player).with_settings(settings);
    announcer.announce(Language::Portuguese, "Olá").unwrap();
}

#[test]
fn test_engine_errors_propagate() {
    let mut player = MockPlayer::new();
    player.expect_voices().returning(|| Ok(Vec::new()));
    player.expect_stop().returning(|| Ok(()));
    player
        .expect_speak()
        .returning(|_| Err(SpeechError::backend("audio device busy")));

    let mut announcer = Announcer::new(player);
    let err = announcer.announce(Language::English, "Hello").unwrap_err();
    assert_eq!(err.to_string(), "Speech backend error: audio device busy");
}

#[test]
fn test_announce_output_reads_requested_slot() {
    let mut output = RenderedOutput::default();
    output.set(Language::English, "Your attention please".to_string());

    let mut player = MockPlayer::new();
    player.expect_voices().returning(|| Ok(engine_voices()));
    player.expect_stop().returning(|| Ok(()));
    player
        .expect_speak()
        .times(1)
        .withf(|utterance| {
            utterance.text == "Your attention please"
                && utterance.voice.as_ref().map(|v| v.id.as_str()) == Some("en-1")
        })
        .returning(|_| Ok(()));

    let mut announcer = Announcer::new(player);
    announcer.announce_output(&output, Language::English).unwrap();

    // Spanish was never rendered
    assert!(matches!(
        announcer.announce_output(&output, Language::Spanish),
        Err(SpeechError::EmptyText { .. })
    ));
}

#[test]
fn test_free_text_request_can_be_spoken() {
    let request = sample_request(TemplateKind::FreeText).with_free_text("Boarding closes soon");

    let mut player = MockPlayer::new();
    player.expect_voices().returning(|| Ok(engine_voices()));
    player.expect_stop().returning(|| Ok(()));
    player
        .expect_speak()
        .withf(|utterance| utterance.text == "Boarding closes soon")
        .returning(|_| Ok(()));

    let mut announcer = Announcer::new(player);
    announcer.announce(Language::English, &request.free_text).unwrap();
}
