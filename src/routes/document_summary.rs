use axum::{Router, extract::State, response::IntoResponse, routing::get};

use crate::state::AppState;

pub fn document_summary_routes() -> Router<AppState> {
    Router::new().route("/", get(get_document_summary))
}

async fn get_document_summary(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(state.content.document_summary().await)
}
