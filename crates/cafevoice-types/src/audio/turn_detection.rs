use crate::error::ConfigError;

/// End-of-turn detection strategy for a session.
///
/// The state machine itself runs inside the runtime; this type owns only the
/// transition thresholds.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum TurnDetection {
    /// End-of-turn is whatever the transcription provider's endpoint signal
    /// declares. No local tuning.
    #[serde(rename = "stt_endpoint")]
    SttEndpoint(SttEndpointTurnDetection),

    /// End-of-turn is derived from a voice-activity detector tuned by the
    /// thresholds below.
    #[serde(rename = "local_vad")]
    LocalVad(LocalVadTurnDetection),
}

impl Default for TurnDetection {
    fn default() -> Self {
        Self::SttEndpoint(SttEndpointTurnDetection::default())
    }
}

impl TurnDetection {
    /// Checks every threshold against its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            TurnDetection::SttEndpoint(_) => Ok(()),
            TurnDetection::LocalVad(vad) => vad.validate(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SttEndpointTurnDetection {}

impl SttEndpointTurnDetection {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Voice-activity turn detection thresholds.
///
/// The defaults target a noisy shared space (dish and cutlery sounds,
/// background chatter): activation is above the provider's 0.5 default, a
/// burst must be sustained before it counts as speech, and the silence gap
/// and endpointing delay are longer than a quiet-room setup would use.
/// Interrupting an in-progress reply additionally requires sustained speech
/// and a minimum word count so stray noise does not cut the agent off.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LocalVadTurnDetection {
    /// Activation threshold for VAD (0.0 to 1.0).
    threshold: f32,

    /// Minimum contiguous speech before a burst counts as speech, in milliseconds.
    min_speech_duration_ms: i32,

    /// Duration of silence to declare the turn over, in milliseconds.
    min_silence_duration_ms: i32,

    /// Additional delay before the committed turn is endpointed, in milliseconds.
    endpointing_delay_ms: i32,

    /// Minimum duration of incoming speech before it may interrupt an
    /// in-progress reply, in milliseconds.
    min_interruption_duration_ms: i32,

    /// Minimum transcribed word count before an interruption is honored.
    min_interruption_words: i32,
}

impl Default for LocalVadTurnDetection {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            min_speech_duration_ms: 250,
            min_silence_duration_ms: 800,
            endpointing_delay_ms: 800,
            min_interruption_duration_ms: 650,
            min_interruption_words: 2,
        }
    }
}

impl LocalVadTurnDetection {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_min_speech_duration_ms(mut self, min_speech_duration_ms: i32) -> Self {
        self.min_speech_duration_ms = min_speech_duration_ms;
        self
    }

    pub fn with_min_silence_duration_ms(mut self, min_silence_duration_ms: i32) -> Self {
        self.min_silence_duration_ms = min_silence_duration_ms;
        self
    }

    pub fn with_endpointing_delay_ms(mut self, endpointing_delay_ms: i32) -> Self {
        self.endpointing_delay_ms = endpointing_delay_ms;
        self
    }

    pub fn with_min_interruption_duration_ms(mut self, min_interruption_duration_ms: i32) -> Self {
        self.min_interruption_duration_ms = min_interruption_duration_ms;
        self
    }

    pub fn with_min_interruption_words(mut self, min_interruption_words: i32) -> Self {
        self.min_interruption_words = min_interruption_words;
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn min_speech_duration_ms(&self) -> i32 {
        self.min_speech_duration_ms
    }

    pub fn min_silence_duration_ms(&self) -> i32 {
        self.min_silence_duration_ms
    }

    pub fn endpointing_delay_ms(&self) -> i32 {
        self.endpointing_delay_ms
    }

    pub fn min_interruption_duration_ms(&self) -> i32 {
        self.min_interruption_duration_ms
    }

    pub fn min_interruption_words(&self) -> i32 {
        self.min_interruption_words
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::OutOfRange {
                field: "threshold",
                got: self.threshold as f64,
                min: 0.0,
                max: 1.0,
            });
        }
        let non_negative = [
            ("min_speech_duration_ms", self.min_speech_duration_ms),
            ("min_silence_duration_ms", self.min_silence_duration_ms),
            ("endpointing_delay_ms", self.endpointing_delay_ms),
            (
                "min_interruption_duration_ms",
                self.min_interruption_duration_ms,
            ),
            ("min_interruption_words", self.min_interruption_words),
        ];
        for (field, got) in non_negative {
            if got < 0 {
                return Err(ConfigError::Negative {
                    field,
                    got: got as i64,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_stt_endpoint_always_valid() {
        let detection = TurnDetection::SttEndpoint(SttEndpointTurnDetection::new());
        assert!(detection.validate().is_ok());
    }

    #[test]
    fn test_local_vad_defaults_valid() {
        let detection = TurnDetection::LocalVad(LocalVadTurnDetection::default());
        assert!(detection.validate().is_ok());
    }

    #[test]
    fn test_threshold_range() {
        let vad = LocalVadTurnDetection::default().with_threshold(1.3);
        let err = vad.validate().unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "threshold", .. }));

        let vad = LocalVadTurnDetection::default().with_threshold(-0.1);
        assert!(vad.validate().is_err());

        let vad = LocalVadTurnDetection::default().with_threshold(1.0);
        assert!(vad.validate().is_ok());
    }

    #[test]
    fn test_negative_durations_rejected() {
        let vad = LocalVadTurnDetection::default().with_min_silence_duration_ms(-1);
        let err = vad.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Negative {
                field: "min_silence_duration_ms",
                got: -1,
            }
        );

        let vad = LocalVadTurnDetection::default().with_min_interruption_words(-2);
        assert!(vad.validate().is_err());
    }

    #[test]
    fn test_wire_tags() {
        let json =
            serde_json::to_string(&TurnDetection::SttEndpoint(SttEndpointTurnDetection::new()))
                .unwrap();
        assert_eq!(json, r#"{"type":"stt_endpoint"}"#);

        let json =
            serde_json::to_string(&TurnDetection::LocalVad(LocalVadTurnDetection::default()))
                .unwrap();
        let parsed: TurnDetection = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed, TurnDetection::LocalVad(_)));
        assert!(json.starts_with(r#"{"type":"local_vad""#));
    }
}
