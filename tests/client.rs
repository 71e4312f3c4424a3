//! End-to-end: the typed client and view-state against a live listener.

use notes_backend::AppState;
use notes_backend::client::{ApiClient, ClientError};
use notes_backend::models::VoiceOutput;
use notes_backend::viewer::{QaPanel, SlideViewer, SummaryPanel, UploadWidget};

const SAMPLE_PDF: &[u8] =
    b"%PDF-1.4\n1 0 obj << /Type /Page >> endobj\nlecture notes about ownership\n%%EOF";

async fn spawn_gateway() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let app = notes_backend::app(AppState::in_memory());

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server runs");
    });

    ApiClient::new(format!("http://{}", addr))
}

#[tokio::test]
async fn client_reads_every_feed() {
    let client = spawn_gateway().await;

    assert_eq!(client.get_slides().await.expect("slides").len(), 3);
    assert_eq!(client.get_slide(42).await.expect("slide").slide_number, 42);
    assert_eq!(client.get_references().await.expect("references").len(), 3);
    assert_eq!(client.get_live_updates().await.expect("updates").len(), 2);
    assert_eq!(client.get_conversation().await.expect("conversation").len(), 3);
    assert_eq!(
        client.get_document_summary().await.expect("summary").title,
        "Building Intelligent Agents with Claude on Vertex AI"
    );
}

#[tokio::test]
async fn non_success_becomes_status_error() {
    let client = spawn_gateway().await;

    let error = client.add_message("   ", None).await.unwrap_err();
    match &error {
        ClientError::Status { status, .. } => assert_eq!(*status, 400),
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(error.api_message().as_deref(), Some("Message is required"));

    let error = client.synthesize_voice("", None).await.unwrap_err();
    assert_eq!(error.api_message().as_deref(), Some("Text is required"));
}

#[tokio::test]
async fn voice_endpoints_fall_back_to_text() {
    let client = spawn_gateway().await;

    match client.generate_slide_voice(2).await.expect("narration") {
        VoiceOutput::Text(narration) => assert_eq!(
            narration.narration_text,
            "Architecture Overview. Understanding the MCP (Model Context Protocol) integration"
        ),
        VoiceOutput::Audio(_) => panic!("no narrator is configured"),
    }

    match client
        .synthesize_voice("Thanks for joining", None)
        .await
        .expect("voice")
    {
        VoiceOutput::Text(response) => assert_eq!(response.voice, "alloy"),
        VoiceOutput::Audio(_) => panic!("no narrator is configured"),
    }
}

#[tokio::test]
async fn qa_panel_round_trip() {
    let client = spawn_gateway().await;
    let mut panel = QaPanel::new();

    panel.reload(&client).await.expect("reload");
    assert_eq!(panel.messages().len(), 3);

    panel.set_user_name("Carol");
    panel.set_draft("  Does MCP work offline?  ");
    let sent = panel
        .submit(&client)
        .await
        .expect("submit")
        .expect("draft was not blank");

    assert_eq!(sent.id, 4);
    assert_eq!(sent.user, "Carol");
    assert_eq!(sent.message, "Does MCP work offline?");
    assert_eq!(panel.draft(), "");
    assert_eq!(panel.messages().len(), 4);
}

#[tokio::test]
async fn viewer_follows_a_regenerated_deck() {
    let client = spawn_gateway().await;
    let mut viewer = SlideViewer::new();
    viewer.load(&client).await.expect("load");
    viewer.go_to(2);

    let generated = client.generate_slides().await.expect("generate");
    assert!(generated.success);

    viewer.load(&client).await.expect("reload");
    assert_eq!(viewer.index(), 0);
    assert_eq!(viewer.slides(), generated.slides.as_slice());

    let narration = viewer.narrate(&client).await.expect("narrate");
    assert!(narration.is_some());
    assert!(viewer.is_narrating());
    viewer.stop_narration();
    assert!(!viewer.is_narrating());
}

#[tokio::test]
async fn upload_widget_completes_and_updates_summary() {
    let client = spawn_gateway().await;
    let mut widget = UploadWidget::new();

    let result = widget
        .upload(&client, "rust_ownership.pdf", "application/pdf", SAMPLE_PDF.to_vec())
        .await
        .cloned()
        .expect("upload succeeds");

    assert_eq!(widget.progress(), 100);
    assert!(widget.error().is_none());
    assert_eq!(result.pages, 1);
    assert_eq!(result.summary.title, "rust ownership");

    let mut summary = SummaryPanel::new();
    summary.load(&client).await.expect("summary");
    assert_eq!(summary.summary().map(|s| s.title.as_str()), Some("rust ownership"));
}
