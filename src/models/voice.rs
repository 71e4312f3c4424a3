use serde::{Deserialize, Serialize};

pub const DEFAULT_VOICE: &str = "alloy";
pub const VOICE_TEXT_MAX_CHARS: usize = 4000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
}

/// Returned instead of audio when no speech backend produced a clip; the
/// browser reads `narration_text` aloud itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrationResponse {
    pub narration_text: String,
    pub audio_url: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceTextResponse {
    pub message: String,
    pub text: String,
    pub voice: String,
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// What a voice endpoint answered with: relayed audio, or the JSON text fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceOutput<T> {
    Audio(AudioClip),
    Text(T),
}
