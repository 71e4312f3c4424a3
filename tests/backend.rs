//! Backend mode against a stub content backend on a local port.

use axum::{
    Json, Router,
    body::Body,
    extract::Path,
    http::{Request, StatusCode, header},
    routing::{get, post},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower::ServiceExt;

use notes_backend::AppState;
use notes_backend::config::{AppConfig, ContentMode};
use notes_backend::content::samples;
use notes_backend::models::SlideContent;
use notes_backend::store::SlideRepository;

const MP3_CLIP: &[u8] = b"ID3\x04\x00\x00\x00\x00\x00\x00mp3-frames";

#[derive(Clone, Copy)]
enum GenerateReply {
    Wrapped,
    Bare,
    WithoutSlides,
}

fn backend_deck() -> Vec<SlideContent> {
    samples::slides().into_iter().take(2).collect()
}

fn generated_deck() -> Vec<SlideContent> {
    (1..=3)
        .map(|number| SlideContent {
            title: format!("Generated {number}"),
            content: "From the backend".to_string(),
            image_url: None,
            image_description: None,
            speaker_notes: None,
            slide_number: number,
        })
        .collect()
}

/// Mimics the FastAPI service: unknown slides come back as its own
/// placeholder, no document was uploaded yet, and speech is served as
/// untyped bytes.
async fn spawn_backend(reply: GenerateReply) -> String {
    let backend = Router::new()
        .route("/api/slides", get(|| async { Json(backend_deck()) }))
        .route(
            "/api/slides/{slide_number}",
            get(|Path(slide_number): Path<i64>| async move {
                let slide = backend_deck()
                    .into_iter()
                    .find(|slide| slide.slide_number == slide_number)
                    .unwrap_or_else(|| samples::placeholder_slide(slide_number));
                Json(slide)
            }),
        )
        .route(
            "/api/document-summary",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"detail": "No document uploaded"})),
                )
            }),
        )
        .route(
            "/api/generate-slides",
            post(move || async move {
                let slides = generated_deck();
                match reply {
                    GenerateReply::Wrapped => Json(json!({"success": true, "slides": slides})),
                    GenerateReply::Bare => Json(json!(slides)),
                    GenerateReply::WithoutSlides => Json(json!({"success": true})),
                }
            }),
        )
        .route(
            "/api/voice/custom",
            post(|| async { ([(header::CONTENT_TYPE, "application/octet-stream")], MP3_CLIP) }),
        );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, backend).await.expect("stub backend runs");
    });

    format!("http://{}", addr)
}

async fn gateway(reply: GenerateReply) -> (AppState, Router) {
    let config = AppConfig {
        content_mode: ContentMode::Backend,
        backend_url: Some(spawn_backend(reply).await),
        ..AppConfig::default()
    };
    let state = AppState::from_config(&config).expect("state builds");
    (state.clone(), notes_backend::app(state))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes()
        .to_vec();
    (status, content_type, body)
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).expect("response body is JSON"))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn slides_come_from_the_backend() {
    let (_, app) = gateway(GenerateReply::Wrapped).await;

    let (status, slides) = send_json(&app, get_request("/api/slides")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slides, json!(backend_deck()));

    let (_, slide) = send_json(&app, get_request("/api/slides/2")).await;
    assert_eq!(slide["title"], "Architecture Overview");
}

#[tokio::test]
async fn backend_placeholder_counts_as_missing_slide() {
    let (_, app) = gateway(GenerateReply::Wrapped).await;

    let (status, slide) = send_json(&app, get_request("/api/slides/7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slide["title"], "Slide Not Found");
    assert_eq!(slide["slide_number"], 7);

    let (status, error) = send_json(
        &app,
        post_json("/api/slides/7", &json!({"action": "generate_voice"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error, json!({"error": "Slide not found"}));
}

#[tokio::test]
async fn backend_404_summary_is_the_never_uploaded_sample() {
    let (_, app) = gateway(GenerateReply::Wrapped).await;

    let (status, summary) = send_json(&app, get_request("/api/document-summary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary, json!(samples::document_summary()));
}

#[tokio::test]
async fn generation_accepts_wrapped_and_bare_replies() {
    for reply in [GenerateReply::Wrapped, GenerateReply::Bare] {
        let (state, app) = gateway(reply).await;

        let (status, generated) = send_json(
            &app,
            Request::post("/api/generate-slides")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(generated["success"], true);
        assert_eq!(generated["slides"], json!(generated_deck()));

        // The local deck only backs static mode.
        assert_eq!(state.slides.all(), samples::slides());
    }
}

#[tokio::test]
async fn generation_without_slides_refetches_the_deck() {
    let (_, app) = gateway(GenerateReply::WithoutSlides).await;

    let (_, generated) = send_json(
        &app,
        Request::post("/api/generate-slides")
            .body(Body::empty())
            .expect("request builds"),
    )
    .await;
    assert_eq!(generated["success"], true);
    assert_eq!(generated["slides"], json!(backend_deck()));
}

#[tokio::test]
async fn slide_narration_relays_sniffed_audio() {
    let (_, app) = gateway(GenerateReply::Wrapped).await;

    let (status, content_type, body) = send(
        &app,
        post_json("/api/slides/1", &json!({"action": "generate_voice"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("audio/mpeg"));
    assert_eq!(body, MP3_CLIP);
}

#[tokio::test]
async fn voice_endpoint_relays_backend_audio() {
    let (_, app) = gateway(GenerateReply::Wrapped).await;

    let (status, content_type, body) =
        send(&app, post_json("/api/voice", &json!({"text": "Hello room"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("audio/mpeg"));
    assert_eq!(body, MP3_CLIP);
}
