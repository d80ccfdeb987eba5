use crate::audio::TranscriptionModel;

/// Configuration for the transcription collaborator.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputTranscription {
    /// BCP-47 code of the language spoken in the room, e.g. "en-IN".
    language: String,

    /// The transcription model to use, e.g. "saaras:v3".
    model: TranscriptionModel,

    /// Whether the provider should emit an explicit flush signal at the end
    /// of each utterance. Endpoint-signal turn detection relies on this.
    #[serde(skip_serializing_if = "Option::is_none")]
    flush_signal: Option<bool>,
}

impl Default for InputTranscription {
    fn default() -> Self {
        Self {
            language: "en-IN".to_string(),
            model: TranscriptionModel::SaarasV3,
            flush_signal: None,
        }
    }
}

impl InputTranscription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn with_model(mut self, model: TranscriptionModel) -> Self {
        self.model = model;
        self
    }

    pub fn with_flush_signal(mut self, flush_signal: bool) -> Self {
        self.flush_signal = Some(flush_signal);
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn model(&self) -> TranscriptionModel {
        self.model.clone()
    }

    pub fn flush_signal(&self) -> bool {
        self.flush_signal.map_or(false, |x| x)
    }
}
