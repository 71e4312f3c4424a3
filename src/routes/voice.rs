use axum::{
    Router,
    extract::{Json, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};

use crate::models::{DEFAULT_VOICE, VOICE_TEXT_MAX_CHARS, VoiceRequest, VoiceTextResponse};
use crate::narration::TEXT_FALLBACK_MESSAGE;
use crate::state::AppState;

pub fn voice_routes() -> Router<AppState> {
    Router::new().route("/", post(synthesize_voice))
}

async fn synthesize_voice(
    State(state): State<AppState>,
    payload: Result<Json<VoiceRequest>, JsonRejection>,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    let Json(payload) = payload.map_err(|_| bad_request("Failed to process voice request"))?;

    let text = payload.text.as_deref().unwrap_or_default().trim();
    if text.is_empty() {
        return Err(bad_request("Text is required"));
    }
    if text.chars().count() > VOICE_TEXT_MAX_CHARS {
        return Err(bad_request(&format!(
            "Text too long (max {} characters)",
            VOICE_TEXT_MAX_CHARS
        )));
    }

    let voice = payload
        .voice
        .as_deref()
        .map(str::trim)
        .filter(|voice| !voice.is_empty())
        .unwrap_or(DEFAULT_VOICE);

    if let Some(clip) = state.narrator.synthesize(text, voice).await {
        return Ok(([(header::CONTENT_TYPE, clip.content_type)], clip.bytes).into_response());
    }

    Ok(Json(VoiceTextResponse {
        message: TEXT_FALLBACK_MESSAGE.to_string(),
        text: text.to_string(),
        voice: voice.to_string(),
        audio_url: None,
    })
    .into_response())
}

fn bad_request(message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": message})),
    )
}
