use axum::{
    Router,
    extract::{Json, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::models::{CreateMessage, NewMessage};
use crate::state::AppState;

pub fn conversation_routes() -> Router<AppState> {
    Router::new().route("/", get(list_messages).post(create_message))
}

async fn list_messages(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.conversation.list())
}

async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateMessage>, JsonRejection>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Rejected conversation body: {}", rejection);
        bad_request("Invalid JSON")
    })?;

    let message = payload.message.as_deref().unwrap_or_default().trim();
    if message.is_empty() {
        return Err(bad_request("Message is required"));
    }

    let created = state
        .conversation
        .append(NewMessage::question(payload.user.as_deref(), message));
    tracing::info!(id = created.id, user = %created.user, "New audience question");

    Ok((StatusCode::CREATED, Json(created)))
}

fn bad_request(detail: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"detail": detail})),
    )
}
