//! Fixed feeds shown beside the slides.

use axum::{Json, Router, response::IntoResponse, routing::get};

use crate::content::samples;
use crate::state::AppState;

pub fn live_updates_routes() -> Router<AppState> {
    Router::new().route("/", get(list_live_updates))
}

pub fn references_routes() -> Router<AppState> {
    Router::new().route("/", get(list_references))
}

async fn list_live_updates() -> impl IntoResponse {
    Json(samples::live_updates())
}

async fn list_references() -> impl IntoResponse {
    Json(samples::references())
}
