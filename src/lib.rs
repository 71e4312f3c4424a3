pub mod client;
pub mod config;
pub mod content;
pub mod models;
pub mod narration;
pub mod routes;
pub mod state;
pub mod store;
pub mod summary;
pub mod upload;
pub mod viewer;

use axum::{Json, Router, response::IntoResponse, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::AppConfig;
pub use state::AppState;

use routes::{
    conversation_routes, document_summary_routes, generate_slides_routes, live_updates_routes,
    references_routes, slides_routes, upload_routes, voice_routes,
};

/// The full HTTP application with CORS and request tracing applied.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/api/conversation", conversation_routes())
        .nest("/api/slides", slides_routes())
        .nest("/api/generate-slides", generate_slides_routes())
        .nest("/api/document-summary", document_summary_routes())
        .nest("/api/upload", upload_routes())
        .nest("/api/voice", voice_routes())
        .nest("/api/live-updates", live_updates_routes())
        .nest("/api/references", references_routes())
        .route("/api/health", get(health_check));

    Router::new()
        .merge(api_routes)
        .route("/", get(root))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({"status": "healthy"}))
}

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({"message": "Are You Taking Notes API is running!"}))
}
