//! Typed HTTP client for the gateway, used by the viewer state and tests.

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

use crate::models::{
    AudioClip, ConversationMessage, CreateMessage, DocumentSummary, GenerateSlidesResponse,
    LiveUpdate, NarrationResponse, ReferenceLink, SlideContent, UploadResult, VoiceOutput,
    VoiceRequest, VoiceTextResponse,
};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },
}

impl ClientError {
    /// The `error` or `detail` message from a JSON error body, if any.
    pub fn api_message(&self) -> Option<String> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("error")
            .or_else(|| value.get("detail"))
            .and_then(|message| message.as_str())
            .map(str::to_string)
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Uses `NEXT_PUBLIC_API_URL`, falling back to the local gateway.
    pub fn from_env() -> Self {
        let base_url = std::env::var("NEXT_PUBLIC_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_slides(&self) -> Result<Vec<SlideContent>, ClientError> {
        self.get_json("/api/slides").await
    }

    pub async fn get_slide(&self, slide_number: i64) -> Result<SlideContent, ClientError> {
        self.get_json(&format!("/api/slides/{}", slide_number)).await
    }

    pub async fn get_references(&self) -> Result<Vec<ReferenceLink>, ClientError> {
        self.get_json("/api/references").await
    }

    pub async fn get_conversation(&self) -> Result<Vec<ConversationMessage>, ClientError> {
        self.get_json("/api/conversation").await
    }

    pub async fn add_message(
        &self,
        message: &str,
        user: Option<&str>,
    ) -> Result<ConversationMessage, ClientError> {
        let body = CreateMessage {
            message: Some(message.to_string()),
            user: user.map(str::to_string),
        };
        let response = self
            .client
            .post(self.url("/api/conversation"))
            .json(&body)
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    pub async fn get_live_updates(&self) -> Result<Vec<LiveUpdate>, ClientError> {
        self.get_json("/api/live-updates").await
    }

    pub async fn get_document_summary(&self) -> Result<DocumentSummary, ClientError> {
        self.get_json("/api/document-summary").await
    }

    pub async fn upload_pdf(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResult, ClientError> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/api/upload"))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    pub async fn generate_slides(&self) -> Result<GenerateSlidesResponse, ClientError> {
        let response = self
            .client
            .post(self.url("/api/generate-slides"))
            .send()
            .await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    pub async fn generate_slide_voice(
        &self,
        slide_number: i64,
    ) -> Result<VoiceOutput<NarrationResponse>, ClientError> {
        let response = self
            .client
            .post(self.url(&format!("/api/slides/{}", slide_number)))
            .json(&json!({ "action": "generate_voice" }))
            .send()
            .await?;
        Self::voice_output(Self::checked(response).await?).await
    }

    pub async fn synthesize_voice(
        &self,
        text: &str,
        voice: Option<&str>,
    ) -> Result<VoiceOutput<VoiceTextResponse>, ClientError> {
        let body = VoiceRequest {
            text: Some(text.to_string()),
            voice: voice.map(str::to_string),
        };
        let response = self
            .client
            .post(self.url("/api/voice"))
            .json(&body)
            .send()
            .await?;
        Self::voice_output(Self::checked(response).await?).await
    }

    async fn voice_output<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<VoiceOutput<T>, ClientError> {
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.starts_with("audio/") {
            let bytes = response.bytes().await?;
            return Ok(VoiceOutput::Audio(AudioClip {
                content_type,
                bytes: bytes.to_vec(),
            }));
        }
        Ok(VoiceOutput::Text(response.json().await?))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        Ok(Self::checked(response).await?.json().await?)
    }

    async fn checked(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/api/slides"), "http://localhost:8000/api/slides");
    }

    #[test]
    fn api_message_reads_error_and_detail_bodies() {
        let upload = ClientError::Status {
            status: 400,
            body: r#"{"error":"Only PDF files are allowed"}"#.to_string(),
        };
        let conversation = ClientError::Status {
            status: 400,
            body: r#"{"detail":"Message is required"}"#.to_string(),
        };
        let plain = ClientError::Status {
            status: 502,
            body: "Bad Gateway".to_string(),
        };

        assert_eq!(upload.api_message().as_deref(), Some("Only PDF files are allowed"));
        assert_eq!(conversation.api_message().as_deref(), Some("Message is required"));
        assert_eq!(plain.api_message(), None);
    }

    #[tokio::test]
    async fn unreachable_gateway_is_an_http_error() {
        let client = ApiClient::new("http://127.0.0.1:1");
        let error = client.get_slides().await.unwrap_err();
        assert!(matches!(error, ClientError::Http(_)));
    }
}
