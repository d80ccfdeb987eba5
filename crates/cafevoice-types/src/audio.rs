mod consts;
mod synthesis;
mod transcription;
mod turn_detection;

pub use consts::*;
pub use synthesis::SpeechSynthesis;
pub use transcription::InputTranscription;
pub use turn_detection::{LocalVadTurnDetection, SttEndpointTurnDetection, TurnDetection};
