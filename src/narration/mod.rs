//! Text-to-speech for slide narration and the free-form voice endpoint.
//!
//! A [`Narrator`] either returns an [`AudioClip`] or nothing; callers then
//! fall back to sending the text so the browser can speak it itself.

use reqwest::header::CONTENT_TYPE;
use serde_json::json;
use thiserror::Error;

use crate::config::OpenAiSettings;
use crate::models::{AudioClip, SlideContent};

pub const TEXT_FALLBACK_MESSAGE: &str = "Voice generation ready (backend needed for actual audio)";

#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("speech request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("speech service answered {0}")]
    Status(reqwest::StatusCode),

    #[error("speech service returned an empty body")]
    Empty,
}

#[derive(Debug, Clone)]
pub enum Narrator {
    /// No speech service configured.
    Disabled,
    /// The content backend's custom voice endpoint.
    Backend { client: reqwest::Client, url: String },
    /// OpenAI's speech endpoint.
    OpenAi {
        client: reqwest::Client,
        settings: OpenAiSettings,
    },
}

impl Narrator {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Backend { .. } => "backend",
            Self::OpenAi { .. } => "openai",
        }
    }

    /// Audio for `text`, or `None` when no audio could be produced.
    pub async fn synthesize(&self, text: &str, voice: &str) -> Option<AudioClip> {
        let result = match self {
            Self::Disabled => return None,
            Self::Backend { client, url } => {
                let request = client.post(url).json(&json!({ "text": text, "voice": voice }));
                fetch_audio(request).await
            }
            Self::OpenAi { client, settings } => {
                let request = client
                    .post(format!("{}/audio/speech", settings.base_url))
                    .bearer_auth(&settings.api_key)
                    .json(&json!({
                        "model": settings.tts_model,
                        "voice": voice,
                        "input": text,
                    }));
                fetch_audio(request).await
            }
        };

        match result {
            Ok(clip) => clip,
            Err(error) => {
                tracing::warn!(narrator = self.name(), "Speech synthesis failed: {}", error);
                None
            }
        }
    }
}

/// The text read out for a slide.
pub fn narration_text(slide: &SlideContent) -> String {
    format!("{}. {}", slide.title, slide.content)
}

async fn fetch_audio(request: reqwest::RequestBuilder) -> Result<Option<AudioClip>, NarrationError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(NarrationError::Status(status));
    }

    let declared = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase());
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Err(NarrationError::Empty);
    }

    // A JSON answer means the service only prepared text; let the caller
    // fall back to browser speech.
    let content_type = match declared.as_deref() {
        Some(value) if value.starts_with("audio/") => Some(value.to_string()),
        Some(value) if value.starts_with("application/json") => None,
        _ => sniff_audio_type(&bytes).map(str::to_string),
    };

    Ok(content_type.map(|content_type| AudioClip {
        content_type,
        bytes: bytes.to_vec(),
    }))
}

/// Guesses an audio MIME type from the leading bytes.
pub fn sniff_audio_type(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [b'I', b'D', b'3', ..] => Some("audio/mpeg"),
        [0xFF, second, ..] if second & 0xE0 == 0xE0 => Some("audio/mpeg"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', ..] => Some("audio/wav"),
        [b'O', b'g', b'g', b'S', ..] => Some("audio/ogg"),
        [b'f', b'L', b'a', b'C', ..] => Some("audio/flac"),
        [_, _, _, _, b'f', b't', b'y', b'p', ..] => Some("audio/mp4"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::samples;

    #[test]
    fn narration_joins_title_and_content() {
        let slide = &samples::slides()[0];
        assert_eq!(
            narration_text(slide),
            "Welcome to Claude Agents. Building intelligent agents with Claude on Vertex AI"
        );
    }

    #[test]
    fn sniffs_common_audio_headers() {
        assert_eq!(sniff_audio_type(b"ID3\x04\x00"), Some("audio/mpeg"));
        assert_eq!(sniff_audio_type(&[0xFF, 0xFB, 0x90, 0x00]), Some("audio/mpeg"));
        assert_eq!(sniff_audio_type(b"RIFF\x24\x00\x00\x00WAVEfmt "), Some("audio/wav"));
        assert_eq!(sniff_audio_type(b"OggS\x00\x02"), Some("audio/ogg"));
        assert_eq!(sniff_audio_type(b"fLaC\x00"), Some("audio/flac"));
    }

    #[test]
    fn json_and_text_are_not_audio() {
        assert_eq!(sniff_audio_type(br#"{"narration_text": "hi"}"#), None);
        assert_eq!(sniff_audio_type(b""), None);
        assert_eq!(sniff_audio_type(b"RIFF\x24\x00\x00\x00AVI "), None);
    }

    #[tokio::test]
    async fn disabled_narrator_produces_nothing() {
        assert!(Narrator::Disabled.synthesize("hello", "alloy").await.is_none());
    }

    #[tokio::test]
    async fn unreachable_backend_narrator_produces_nothing() {
        let narrator = Narrator::Backend {
            client: reqwest::Client::new(),
            url: "http://127.0.0.1:1/api/voice/custom".to_string(),
        };
        assert!(narrator.synthesize("hello", "alloy").await.is_none());
    }
}
