//! Assembles the per-session configuration: persona script, provider
//! bindings, and the selected turn-detection policy.

use crate::config::{Config, TurnMode};
use crate::persona;
use cafevoice_types::audio::{
    InputTranscription, LocalVadTurnDetection, SpeechSynthesis, SttEndpointTurnDetection,
    SynthesisModel, TranscriptionModel, TurnDetection, Voice,
};
use cafevoice_types::{ConfigError, Session};

/// Builds one fresh session configuration. Called once per job assignment,
/// so no state is shared between sessions.
pub fn session_config(config: &Config) -> Result<Session, ConfigError> {
    let turn_detection = match config.turn_mode {
        TurnMode::Stt => TurnDetection::SttEndpoint(SttEndpointTurnDetection::new()),
        // Cafeteria tuning: ambient dish and cutlery noise must not fragment
        // turns or cut off an in-progress reply.
        TurnMode::Vad => TurnDetection::LocalVad(
            LocalVadTurnDetection::default()
                .with_threshold(0.6)
                .with_min_speech_duration_ms(250)
                .with_min_silence_duration_ms(800)
                .with_endpointing_delay_ms(800)
                .with_min_interruption_duration_ms(650)
                .with_min_interruption_words(2),
        ),
    };

    Session::new()
        .with_instructions(&persona::instructions(&persona::Menu::today()))
        .with_llm_model(&config.chat_model)
        .with_input_transcription(
            InputTranscription::new()
                .with_language("en-IN")
                .with_model(TranscriptionModel::SaarasV3)
                .with_flush_signal(true),
        )
        .with_speech_synthesis(
            SpeechSynthesis::new()
                .with_target_language_code("en-IN")
                .with_model(SynthesisModel::BulbulV2)
                .with_speaker(Voice::Anushka),
        )
        .with_turn_detection_enable(turn_detection)
        .build()
}

#[cfg(test)]
mod test {
    use super::*;
    use tracing::Level;

    fn config(turn_mode: TurnMode) -> Config {
        Config {
            sarvam_api_key: "sk_test".to_string(),
            gemini_api_key: "gk_test".to_string(),
            chat_model: "gemini-2.0-flash".to_string(),
            turn_mode,
            log_level: Level::INFO,
        }
    }

    #[test]
    fn test_stt_mode_builds_without_turn_parameters() {
        let session = session_config(&config(TurnMode::Stt)).unwrap();
        assert!(matches!(
            session.turn_detection(),
            Some(TurnDetection::SttEndpoint(_))
        ));
    }

    #[test]
    fn test_vad_mode_carries_the_cafeteria_tuning() {
        let session = session_config(&config(TurnMode::Vad)).unwrap();
        match session.turn_detection() {
            Some(TurnDetection::LocalVad(vad)) => {
                assert_eq!(vad.threshold(), 0.6);
                assert_eq!(vad.min_speech_duration_ms(), 250);
                assert_eq!(vad.min_silence_duration_ms(), 800);
                assert_eq!(vad.endpointing_delay_ms(), 800);
                assert_eq!(vad.min_interruption_duration_ms(), 650);
                assert_eq!(vad.min_interruption_words(), 2);
            }
            other => panic!("expected local VAD policy, got {:?}", other),
        }
    }

    #[test]
    fn test_turn_mode_does_not_touch_persona_or_providers() {
        let stt = session_config(&config(TurnMode::Stt)).unwrap();
        let vad = session_config(&config(TurnMode::Vad)).unwrap();

        assert_eq!(stt.instructions(), vad.instructions());
        assert_eq!(stt.llm_model(), vad.llm_model());
        assert_eq!(stt.input_transcription(), vad.input_transcription());
        assert_eq!(stt.speech_synthesis(), vad.speech_synthesis());
        assert_ne!(stt.turn_detection(), vad.turn_detection());
    }

    #[test]
    fn test_consecutive_jobs_get_independent_configs() {
        let config = config(TurnMode::Vad);
        let first = session_config(&config).unwrap();
        let second = session_config(&config).unwrap();
        // Equal values, built independently per job.
        assert_eq!(first, second);
    }

    #[test]
    fn test_provider_bindings_match_the_deployment() {
        let session = session_config(&config(TurnMode::Stt)).unwrap();

        let transcription = session.input_transcription().unwrap();
        assert_eq!(transcription.language(), "en-IN");
        assert_eq!(transcription.model(), TranscriptionModel::SaarasV3);
        assert!(transcription.flush_signal());

        let synthesis = session.speech_synthesis().unwrap();
        assert_eq!(synthesis.target_language_code(), "en-IN");
        assert_eq!(synthesis.model(), SynthesisModel::BulbulV2);
        assert_eq!(synthesis.speaker(), Voice::Anushka);
    }
}
