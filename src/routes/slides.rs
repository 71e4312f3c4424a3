use axum::{
    Router,
    extract::{Json, Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::content::samples;
use crate::models::{DEFAULT_VOICE, NarrationResponse, SlideAction};
use crate::narration::{self, TEXT_FALLBACK_MESSAGE};
use crate::state::AppState;

const GENERATE_VOICE: &str = "generate_voice";

pub fn slides_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_slides))
        .route("/{slide_number}", get(get_slide).post(slide_action))
}

pub fn generate_slides_routes() -> Router<AppState> {
    Router::new().route("/", post(generate_slides))
}

async fn list_slides(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.content.slides().await)
}

async fn get_slide(
    State(state): State<AppState>,
    Path(raw_number): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    let slide_number = raw_number
        .trim()
        .parse::<i64>()
        .map_err(|_| error(StatusCode::BAD_REQUEST, "Invalid slide number"))?;

    let slide = state
        .content
        .slide(slide_number)
        .await
        .unwrap_or_else(|| samples::placeholder_slide(slide_number));

    Ok(Json(slide))
}

async fn slide_action(
    State(state): State<AppState>,
    Path(raw_number): Path<String>,
    payload: Result<Json<SlideAction>, JsonRejection>,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    let Json(payload) =
        payload.map_err(|_| error(StatusCode::BAD_REQUEST, "Failed to process request"))?;

    if payload.action.as_deref() != Some(GENERATE_VOICE) {
        return Err(error(StatusCode::BAD_REQUEST, "Invalid action"));
    }

    // A number that doesn't parse can't name a slide either.
    let slide = match raw_number.trim().parse::<i64>() {
        Ok(slide_number) => state.content.slide(slide_number).await,
        Err(_) => None,
    }
    .ok_or_else(|| error(StatusCode::NOT_FOUND, "Slide not found"))?;

    let narration_text = narration::narration_text(&slide);
    if let Some(clip) = state.narrator.synthesize(&narration_text, DEFAULT_VOICE).await {
        tracing::debug!(
            slide_number = slide.slide_number,
            bytes = clip.bytes.len(),
            "Relaying slide narration audio"
        );
        return Ok(([(header::CONTENT_TYPE, clip.content_type)], clip.bytes).into_response());
    }

    Ok(Json(NarrationResponse {
        narration_text,
        audio_url: None,
        message: TEXT_FALLBACK_MESSAGE.to_string(),
    })
    .into_response())
}

async fn generate_slides(State(state): State<AppState>) -> impl IntoResponse {
    let conversation = state.conversation.list();
    Json(state.content.generate_slides(&conversation).await)
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({"error": message})))
}
