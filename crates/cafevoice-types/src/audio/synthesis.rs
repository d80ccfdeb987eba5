use crate::audio::{SynthesisModel, Voice};

/// Configuration for the synthesis collaborator.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpeechSynthesis {
    /// BCP-47 code of the language replies are spoken in, e.g. "en-IN".
    target_language_code: String,

    /// The synthesis model to use, e.g. "bulbul:v2".
    model: SynthesisModel,

    /// The speaker voice, selected from the provider's named set.
    speaker: Voice,
}

impl Default for SpeechSynthesis {
    fn default() -> Self {
        Self {
            target_language_code: "en-IN".to_string(),
            model: SynthesisModel::BulbulV2,
            speaker: Voice::Anushka,
        }
    }
}

impl SpeechSynthesis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_language_code(mut self, target_language_code: &str) -> Self {
        self.target_language_code = target_language_code.to_string();
        self
    }

    pub fn with_model(mut self, model: SynthesisModel) -> Self {
        self.model = model;
        self
    }

    pub fn with_speaker(mut self, speaker: Voice) -> Self {
        self.speaker = speaker;
        self
    }

    pub fn target_language_code(&self) -> &str {
        &self.target_language_code
    }

    pub fn model(&self) -> SynthesisModel {
        self.model.clone()
    }

    pub fn speaker(&self) -> Voice {
        self.speaker.clone()
    }
}
