use reqwest::StatusCode as HttpStatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;

use crate::models::{ConversationMessage, DocumentSummary, GenerateSlidesResponse, SlideContent};

use super::samples;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend answered {status}: {body}")]
    Status { status: HttpStatusCode, body: String },

    #[error("backend payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BackendError {
    fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == HttpStatusCode::NOT_FOUND)
    }
}

/// Client for the external content backend (the FastAPI service).
#[derive(Debug, Clone)]
pub struct BackendContent {
    client: reqwest::Client,
    base_url: String,
}

impl BackendContent {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn slides(&self) -> Vec<SlideContent> {
        match self.get_json::<Vec<SlideContent>>("/api/slides").await {
            Ok(slides) => slides,
            Err(error) => {
                tracing::warn!("Backend slides unavailable, serving empty deck: {}", error);
                Vec::new()
            }
        }
    }

    pub async fn slide(&self, slide_number: i64) -> Option<SlideContent> {
        let path = format!("/api/slides/{}", slide_number);
        match self.get_json::<SlideContent>(&path).await {
            // The backend answers unknown numbers with its own placeholder.
            Ok(slide) if slide.title == samples::placeholder_slide(slide_number).title => None,
            Ok(slide) => Some(slide),
            Err(error) if error.is_not_found() => None,
            Err(error) => {
                tracing::warn!(slide_number, "Backend slide unavailable: {}", error);
                None
            }
        }
    }

    pub async fn document_summary(&self) -> DocumentSummary {
        match self
            .get_json::<DocumentSummary>("/api/document-summary")
            .await
        {
            Ok(summary) => summary,
            Err(error) if error.is_not_found() => samples::document_summary(),
            Err(error) => {
                tracing::warn!("Backend document summary unavailable: {}", error);
                samples::unavailable_document_summary()
            }
        }
    }

    pub async fn generate_slides(
        &self,
        conversation: &[ConversationMessage],
    ) -> GenerateSlidesResponse {
        match self.request_generation(conversation).await {
            Ok(slides) => GenerateSlidesResponse {
                success: true,
                message: format!("Generated {} slides", slides.len()),
                slides,
            },
            Err(error) => {
                tracing::warn!("Backend slide generation failed: {}", error);
                GenerateSlidesResponse {
                    success: false,
                    message: "Slide generation is unavailable right now".to_string(),
                    slides: Vec::new(),
                }
            }
        }
    }

    async fn request_generation(
        &self,
        conversation: &[ConversationMessage],
    ) -> Result<Vec<SlideContent>, BackendError> {
        let response = self
            .client
            .post(self.url("/api/generate-slides"))
            .json(&json!({ "conversation": conversation }))
            .send()
            .await?;
        let body: Value = Self::checked(response).await?.json().await?;

        // Older backends answer with the bare list, newer ones wrap it.
        let slides = match body {
            Value::Object(mut object) => object.remove("slides").unwrap_or(Value::Null),
            other => other,
        };
        if slides.is_null() {
            return self.get_json("/api/slides").await;
        }
        Ok(serde_json::from_value(slides)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self.client.get(self.url(path)).send().await?;
        let body = Self::checked(response).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn checked(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Status { status, body })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
