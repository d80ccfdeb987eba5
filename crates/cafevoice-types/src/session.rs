use crate::audio::{InputTranscription, SpeechSynthesis, TurnDetection};
use crate::error::ConfigError;

/// The full configuration handed to the runtime when a session starts.
///
/// One value is built per connecting user and stays read-only for the
/// session's lifetime. The pipeline shape (listen, detect end of turn,
/// transcribe, generate, synthesize, play) is fixed inside the runtime; this
/// struct only selects collaborators and thresholds.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    /// The persona script prepended to every language-model call.
    instructions: Option<String>,

    /// Identifier of the language model generating replies, e.g. "gemini-2.0-flash".
    llm_model: Option<String>,

    /// Configuration for the transcription collaborator.
    input_transcription: Option<InputTranscription>,

    /// Configuration for the synthesis collaborator.
    speech_synthesis: Option<SpeechSynthesis>,

    /// Turn-detection strategy. None leaves the runtime's default in place.
    turn_detection: Option<TurnDetection>,
}

impl Session {
    pub fn new() -> SessionConfigurator {
        SessionConfigurator::new()
    }

    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    pub fn llm_model(&self) -> Option<&str> {
        self.llm_model.as_deref()
    }

    pub fn input_transcription(&self) -> Option<&InputTranscription> {
        self.input_transcription.as_ref()
    }

    pub fn speech_synthesis(&self) -> Option<&SpeechSynthesis> {
        self.speech_synthesis.as_ref()
    }

    pub fn turn_detection(&self) -> Option<&TurnDetection> {
        self.turn_detection.as_ref()
    }
}

#[derive(Clone)]
pub struct SessionConfigurator {
    session: Session,
}

impl SessionConfigurator {
    pub fn new() -> Self {
        Self {
            session: Session {
                instructions: None,
                llm_model: None,
                input_transcription: None,
                speech_synthesis: None,
                turn_detection: None,
            },
        }
    }

    pub fn with_instructions(mut self, instructions: &str) -> Self {
        self.session.instructions = Some(instructions.to_string());
        self
    }

    pub fn with_llm_model(mut self, llm_model: &str) -> Self {
        self.session.llm_model = Some(llm_model.to_string());
        self
    }

    pub fn with_input_transcription(mut self, input_transcription: InputTranscription) -> Self {
        self.session.input_transcription = Some(input_transcription);
        self
    }

    pub fn with_speech_synthesis(mut self, speech_synthesis: SpeechSynthesis) -> Self {
        self.session.speech_synthesis = Some(speech_synthesis);
        self
    }

    pub fn with_turn_detection_enable(mut self, turn_detection: TurnDetection) -> Self {
        self.session.turn_detection = Some(turn_detection);
        self
    }

    pub fn with_turn_detection_disable(mut self) -> Self {
        self.session.turn_detection = None;
        self
    }

    /// Validates every threshold eagerly so a malformed configuration never
    /// reaches the runtime.
    pub fn build(self) -> Result<Session, ConfigError> {
        if let Some(turn_detection) = &self.session.turn_detection {
            turn_detection.validate()?;
        }
        Ok(self.session)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::audio::{LocalVadTurnDetection, SttEndpointTurnDetection};

    #[test]
    fn test_build_without_turn_policy_cannot_fail() {
        let session = Session::new()
            .with_instructions("You collect cafeteria feedback.")
            .with_llm_model("gemini-2.0-flash")
            .build()
            .unwrap();
        assert_eq!(session.turn_detection(), None);
        assert_eq!(session.llm_model(), Some("gemini-2.0-flash"));
    }

    #[test]
    fn test_build_with_stt_endpoint_cannot_fail() {
        let session = Session::new()
            .with_turn_detection_enable(TurnDetection::SttEndpoint(
                SttEndpointTurnDetection::new(),
            ))
            .build();
        assert!(session.is_ok());
    }

    #[test]
    fn test_build_rejects_out_of_range_vad() {
        let result = Session::new()
            .with_turn_detection_enable(TurnDetection::LocalVad(
                LocalVadTurnDetection::default().with_threshold(2.0),
            ))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_turn_detection_independent_of_persona_and_providers() {
        let base = Session::new()
            .with_instructions("You collect cafeteria feedback.")
            .with_llm_model("gemini-2.0-flash")
            .with_input_transcription(InputTranscription::new())
            .with_speech_synthesis(SpeechSynthesis::new());

        let a = base
            .clone()
            .with_turn_detection_enable(TurnDetection::SttEndpoint(
                SttEndpointTurnDetection::new(),
            ))
            .build()
            .unwrap();
        let b = base
            .with_turn_detection_enable(TurnDetection::LocalVad(LocalVadTurnDetection::default()))
            .build()
            .unwrap();

        assert_eq!(a.instructions(), b.instructions());
        assert_eq!(a.input_transcription(), b.input_transcription());
        assert_eq!(a.speech_synthesis(), b.speech_synthesis());
        assert_ne!(a.turn_detection(), b.turn_detection());
    }
}
