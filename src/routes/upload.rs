use axum::{
    Router,
    extract::{
        DefaultBodyLimit, Json, Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::models::UploadStatus;
use crate::state::AppState;
use crate::upload::{self, AnalysisInput, UPLOAD_BODY_LIMIT, UploadRejection};

pub fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(upload_status).post(upload_pdf))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}

async fn upload_status() -> impl IntoResponse {
    Json(UploadStatus {
        message: "PDF Upload endpoint ready".to_string(),
        max_file_size: "10MB".to_string(),
        supported_formats: vec!["PDF".to_string()],
        status: "operational".to_string(),
    })
}

async fn upload_pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    // A body that isn't multipart at all carries no file.
    let mut multipart = multipart.map_err(|_| rejected(UploadRejection::MissingFile))?;
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("document.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;
        file = Some((filename, content_type, data.to_vec()));
        break;
    }

    let (filename, content_type, bytes) =
        file.ok_or_else(|| rejected(UploadRejection::MissingFile))?;
    upload::validate_upload(content_type.as_deref(), bytes.len()).map_err(|rejection| {
        tracing::info!(
            filename = %filename,
            content_type = content_type.as_deref().unwrap_or("unknown"),
            size = bytes.len(),
            "Upload rejected: {}",
            rejection.message()
        );
        rejected(rejection)
    })?;

    let result = upload::analyze(AnalysisInput { filename, bytes }, &state.summarizer).await;
    state.summaries.set(result.summary.clone());

    Ok(Json(result))
}

fn rejected(rejection: UploadRejection) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": rejection.message()})),
    )
}

fn multipart_error(error: MultipartError) -> (StatusCode, Json<serde_json::Value>) {
    // Bodies past the route limit surface here rather than in the size check.
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return rejected(UploadRejection::TooLarge);
    }
    tracing::debug!("Malformed multipart upload: {}", error);
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": error.body_text()})),
    )
}
